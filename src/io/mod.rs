/*!
# IO utilities

Dump fragment discovery and reading, article writing.
!*/
pub mod discover;
pub mod reader;
pub mod writer;

pub use discover::dump_files;
pub use reader::DumpReader;
pub use writer::{ArticleWriter, OutputFormat};
