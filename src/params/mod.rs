//! Query parameter validation
//!
//! Parses and validates the `{min, max, n}` triple that drives a single
//! query. Raw caller input arrives as opaque strings (originally three
//! numeric form fields); validated parameters are immutable thereafter.

mod error;

pub use error::ParamError;

use serde::Serialize;

/// Validated min/max/count triple driving a single query
///
/// Invariants: `min <= max` and `n > 0`. Fields are private so the
/// invariants cannot be broken after construction; every instance comes
/// through [`QueryParams::validate`] or [`QueryParams::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    min: i64,
    max: i64,
    n: u32,
}

impl QueryParams {
    /// Validate raw string input into query parameters
    ///
    /// Expects exactly three fields in order: min, max, n. Each field is
    /// parsed as a base-10 integer with surrounding whitespace tolerated.
    ///
    /// # Errors
    /// - `InvalidInput` if the field count is wrong or any field is not a
    ///   well-formed integer
    /// - `InvalidRange` if min > max
    /// - `InvalidCount` if n <= 0
    pub fn validate<S: AsRef<str>>(raw: &[S]) -> Result<Self, ParamError> {
        if raw.len() != 3 {
            return Err(ParamError::invalid_input(
                "fields",
                format!("expected 3 fields, got {}", raw.len()),
            ));
        }

        let min = parse_field("min", raw[0].as_ref())?;
        let max = parse_field("max", raw[1].as_ref())?;
        let n = parse_field("n", raw[2].as_ref())?;

        Self::new(min, max, n)
    }

    /// Construct from already-numeric values, enforcing the same invariants
    ///
    /// # Errors
    /// - `InvalidRange` if min > max
    /// - `InvalidCount` if n <= 0 or n exceeds `u32::MAX`
    pub fn new(min: i64, max: i64, n: i64) -> Result<Self, ParamError> {
        if min > max {
            return Err(ParamError::InvalidRange { min, max });
        }
        if n <= 0 {
            return Err(ParamError::InvalidCount { n });
        }
        let n = u32::try_from(n).map_err(|_| ParamError::InvalidCount { n })?;

        Ok(Self { min, max, n })
    }

    /// Smallest integer the service may return
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest integer the service may return
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of integers requested
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Check whether a value lies within the requested range
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parse a single raw field as a base-10 integer
fn parse_field(field: &str, raw: &str) -> Result<i64, ParamError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ParamError::invalid_input(field, raw))
}

#[cfg(test)]
mod tests;
