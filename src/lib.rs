pub mod cli;
pub mod error;
pub mod io;
pub mod lookup;
pub mod markup;
pub mod pipeline;
