//! Randtally client library
//!
//! A typed client for the random.org JSON-RPC integer service plus a pure
//! frequency-analysis pipeline:
//!
//! validate → fetch → analyze → rank → present
//!
//! The crate owns the data pipeline only. Rendering (lists, bar charts) is
//! the consumer's job and attaches through the [`Presenter`] trait and the
//! [`AnalysisResult`] data contract.
//!
//! ## Typical usage
//!
//! ```no_run
//! use randtally::{run_query, RandomOrgClient, SourceConfig};
//!
//! # async fn demo() -> Result<(), randtally::Error> {
//! let config = SourceConfig::from_env()?;
//! let client = RandomOrgClient::new(config);
//! let result = run_query(&client, &["1", "100", "50"]).await?;
//! println!("{:?}", result.frequencies);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod present;
pub mod source;

pub use analysis::{analyze, rank, AnalysisResult, FrequencyEntry};
pub use error::Error;
pub use params::{ParamError, QueryParams};
pub use pipeline::{run_and_present, run_query, run_validated};
pub use present::Presenter;
pub use source::{
    ApiKey, NumberList, NumberSource, RandomOrgClient, SourceConfig, SourceError,
};
