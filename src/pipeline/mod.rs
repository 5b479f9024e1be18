//! Query pipeline orchestration
//!
//! Composes the stages sequentially, each short-circuiting on failure:
//!
//! validate → fetch → analyze → rank
//!
//! No state is shared across invocations; every query's data structures
//! are independent and dropped once the presenter has consumed them.

use tracing::debug;

use crate::analysis::{analyze, rank, AnalysisResult};
use crate::error::Error;
use crate::params::QueryParams;
use crate::present::Presenter;
use crate::source::NumberSource;

/// Run the full pipeline from raw string input
///
/// Validates `raw` (min, max, n in order), fetches from `source`, and
/// returns the ranked analysis result. Validation failures surface before
/// any network I/O happens.
pub async fn run_query<S, R>(source: &S, raw: &[R]) -> Result<AnalysisResult, Error>
where
    S: NumberSource + ?Sized,
    R: AsRef<str>,
{
    let params = QueryParams::validate(raw)?;
    run_validated(source, &params).await
}

/// Run the pipeline for a caller already holding validated parameters
pub async fn run_validated<S>(source: &S, params: &QueryParams) -> Result<AnalysisResult, Error>
where
    S: NumberSource + ?Sized,
{
    let numbers = source.fetch(params).await?;
    let result = rank(analyze(numbers));
    debug!(
        total = result.total_count(),
        distinct = result.distinct_count(),
        "query complete"
    );
    Ok(result)
}

/// Run the pipeline and hand the result to a presenter
///
/// The presenter is invoked only on success; errors propagate untouched.
pub async fn run_and_present<S, R, P>(source: &S, raw: &[R], presenter: &mut P) -> Result<(), Error>
where
    S: NumberSource + ?Sized,
    R: AsRef<str>,
    P: Presenter,
{
    let result = run_query(source, raw).await?;
    presenter.present(&result);
    Ok(())
}
