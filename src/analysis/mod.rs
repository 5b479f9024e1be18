//! Frequency analysis for fetched number lists
//!
//! Pure, deterministic stages operating on owned data:
//!
//! - [`analyze`] reduces a number list to distinct-value/frequency pairs
//! - [`rank`] imposes the deterministic presentation order
//!
//! No I/O, no shared state; each query's result is independent.

mod types;

pub use types::{AnalysisResult, FrequencyEntry};

mod frequency;
mod ranking;

pub use frequency::analyze;
pub use ranking::rank;
