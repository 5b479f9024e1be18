//! Deterministic ranking of frequency entries

use super::AnalysisResult;

/// Order `frequencies` descending by frequency
///
/// Ties are broken ascending by `number` so the output is reproducible.
/// `numbers` passes through untouched. Idempotent.
pub fn rank(mut result: AnalysisResult) -> AnalysisResult {
    result
        .frequencies
        .sort_by(|a, b| b.frequency.cmp(&a.frequency).then(a.number.cmp(&b.number)));
    result
}
