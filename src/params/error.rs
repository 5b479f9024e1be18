//! Error types for query parameter validation

use thiserror::Error;

/// Errors that can occur while validating raw query input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A raw field is not a well-formed base-10 integer (or the field set
    /// itself is malformed)
    #[error("invalid input for {field}: {value}")]
    InvalidInput {
        /// Which field was rejected (min, max, n, or "fields" for arity)
        field: String,
        /// The offending raw text
        value: String,
    },

    /// The requested range is inverted
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange {
        /// Requested lower bound
        min: i64,
        /// Requested upper bound
        max: i64,
    },

    /// The requested count is not a positive integer
    #[error("invalid count: {n}")]
    InvalidCount {
        /// The rejected count value
        n: i64,
    },
}

impl ParamError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }
}
