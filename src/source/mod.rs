//! Remote number source
//!
//! Abstracts the external integer-generation service behind the
//! [`NumberSource`] capability trait, with a reqwest-backed
//! [`RandomOrgClient`] speaking the random.org JSON-RPC v1 wire contract.

mod client;
mod config;
mod error;
pub mod rpc;

pub use client::RandomOrgClient;
pub use config::{ApiKey, SourceConfig, API_KEY_ENV, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::SourceError;

use async_trait::async_trait;

use crate::params::QueryParams;

/// Ordered sequence of fetched integers, length n, each in [min, max]
pub type NumberList = Vec<i64>;

/// External service abstraction producing the integer sequence
///
/// Implementations send a single request per call and never retry;
/// retry/backoff is an extension point layered by callers around this
/// trait, not inside it.
#[async_trait]
pub trait NumberSource: Send + Sync {
    /// Fetch exactly `params.n()` integers uniformly distributed in
    /// `[params.min(), params.max()]`, repeats allowed
    ///
    /// # Errors
    /// - `Unavailable` on transport failure or timeout
    /// - `Protocol` on a malformed response or a postcondition violation
    /// - `Quota` when the service reports rate-limit/quota exhaustion
    async fn fetch(&self, params: &QueryParams) -> Result<NumberList, SourceError>;
}
