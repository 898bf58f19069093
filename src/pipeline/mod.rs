//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, and the [LinkSpan] pipeline
//! that turns dump fragments into articles with link spans.
mod linkspan;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod types;

pub use linkspan::LinkSpan;
pub use pipeline::Pipeline;
pub use types::{Article, DumpRecord, Paragraph};
