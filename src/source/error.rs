//! Error types for the remote number source
//!
//! Distinguishes transport failures, protocol violations, and quota
//! exhaustion so callers can decide whether to surface, fix, or back off.

use thiserror::Error;

/// Errors that can occur while fetching numbers from the remote service
#[derive(Error, Debug)]
pub enum SourceError {
    /// Network/transport failure (connect, DNS, TLS, timeout, body read)
    #[error("source unavailable: {0}")]
    Unavailable(String),

    /// Malformed response, unexpected status, missing result, or a
    /// postcondition violation by the upstream service
    #[error("source protocol error: {0}")]
    Protocol(String),

    /// The service reported rate-limit/quota exhaustion
    #[error("source quota exhausted: code={code}, message={message}")]
    Quota {
        /// JSON-RPC error code reported by the service
        code: i64,
        /// Service-provided error message
        message: String,
        /// Suggested back-off in milliseconds, when the service provides it
        advisory_delay: Option<u64>,
    },

    /// Client configuration problem (e.g. missing credential)
    #[error("source configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Unavailable(e.to_string())
    }
}

impl SourceError {
    /// Create a Protocol error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error is a quota exhaustion the caller should back
    /// off from
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::Quota { .. })
    }
}
