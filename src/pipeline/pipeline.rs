//! Pipeline trait.
use crate::error::Error;

/// A runnable pipeline, generic over what a run yields
/// (the collected articles for [crate::pipeline::LinkSpan]).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
