//! Unified crate error type
//!
//! Aggregates the per-module error taxonomies into a single type suitable
//! for returning from the pipeline entry points.

use thiserror::Error;

use crate::params::ParamError;
use crate::source::SourceError;

/// Top-level error type returned by the pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Query parameter validation failed
    #[error("parameter error: {0}")]
    Params(#[from] ParamError),

    /// Remote number fetch failed
    #[error("source error: {0}")]
    Source(#[from] SourceError),
}

impl Error {
    /// Check if this error is recoverable by re-prompting the caller
    /// (validation failures, as opposed to remote-fetch failures)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Params(_))
    }
}
