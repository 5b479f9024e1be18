//! Analysis type definitions
//!
//! Contains the data structures handed from the pipeline to presentation.

use serde::{Deserialize, Serialize};

/// A distinct observed value paired with its occurrence count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FrequencyEntry {
    /// The observed integer value
    pub number: i64,

    /// How many times the value appeared (always >= 1)
    pub frequency: u32,
}

/// The pipeline's final data product, consumed by presentation
///
/// `numbers` preserves the fetched sequence exactly as received, including
/// duplicates. `frequencies` holds one entry per distinct value; its order
/// is unspecified out of [`analyze`](super::analyze) and deterministic
/// after [`rank`](super::rank).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisResult {
    /// The fetched numbers in original order
    pub numbers: Vec<i64>,

    /// One entry per distinct observed value
    pub frequencies: Vec<FrequencyEntry>,
}

impl FrequencyEntry {
    /// Create a frequency entry
    pub fn new(number: i64, frequency: u32) -> Self {
        Self { number, frequency }
    }
}

impl AnalysisResult {
    /// Total number of observations (sum of all frequencies)
    pub fn total_count(&self) -> usize {
        self.numbers.len()
    }

    /// Number of distinct values observed
    pub fn distinct_count(&self) -> usize {
        self.frequencies.len()
    }
}
