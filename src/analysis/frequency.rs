//! Frequency counting
//!
//! Single-pass reduction of a number list to distinct-value/frequency
//! pairs. Pure function, deterministic given its input.

use std::collections::HashMap;

use super::{AnalysisResult, FrequencyEntry};

/// Count occurrences of each distinct value in `numbers`
///
/// The input sequence is moved into the result unmodified (original order,
/// duplicates included). The order of `frequencies` out of this stage is
/// unspecified; [`rank`](super::rank) imposes the final order.
///
/// # Arguments
/// * `numbers` - The fetched number list
///
/// # Returns
/// AnalysisResult with the original numbers and one entry per distinct value
pub fn analyze(numbers: Vec<i64>) -> AnalysisResult {
    let mut counts: HashMap<i64, u32> = HashMap::new();

    for &num in &numbers {
        *counts.entry(num).or_insert(0) += 1;
    }

    let frequencies = counts
        .into_iter()
        .map(|(number, frequency)| FrequencyEntry { number, frequency })
        .collect();

    AnalysisResult {
        numbers,
        frequencies,
    }
}
