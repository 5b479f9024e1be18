//! Presentation seam
//!
//! The crate ships no renderer; consumers (GUI, web, CLI front ends)
//! implement [`Presenter`] to display the finished result, typically the
//! number list as text and the frequencies as a bar chart with each bar
//! labeled by value and count.

use crate::analysis::AnalysisResult;

/// Consumer of a finished, ranked analysis result
pub trait Presenter {
    /// Render the result
    ///
    /// Called once per successful query with the ranked result; never
    /// called when the pipeline fails.
    fn present(&mut self, result: &AnalysisResult);
}

impl<F> Presenter for F
where
    F: FnMut(&AnalysisResult),
{
    fn present(&mut self, result: &AnalysisResult) {
        self(result)
    }
}
