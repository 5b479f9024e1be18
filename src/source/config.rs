//! Source configuration and credential handling
//!
//! The API key is never embedded in code; it reaches the client through
//! [`SourceConfig::from_env`] or explicit injection by a trusted caller,
//! and never appears in `Debug` output or log events.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::SourceError;

/// Environment variable holding the service credential
pub const API_KEY_ENV: &str = "RANDTALLY_API_KEY";

/// Environment variable overriding the service endpoint (optional)
pub const ENDPOINT_ENV: &str = "RANDTALLY_ENDPOINT";

/// Default random.org JSON-RPC v1 endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.random.org/json-rpc/1/invoke";

/// Service credential, redacted everywhere except the wire request
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a credential string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

// The secret must never reach Debug/Display surfaces
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Configuration for the remote number source
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// JSON-RPC endpoint URL
    pub endpoint: String,
    /// Service credential
    pub api_key: ApiKey,
    /// Request timeout; None imposes no timeout (the default)
    pub timeout: Option<Duration>,
    /// Sampling-with-replacement override; None uses the service default
    /// (repeats allowed)
    pub replacement: Option<bool>,
}

impl SourceConfig {
    /// Create a configuration with the default endpoint and no timeout
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            timeout: None,
            replacement: None,
        }
    }

    /// Build a configuration from the environment
    ///
    /// Reads `RANDTALLY_API_KEY` (required) and `RANDTALLY_ENDPOINT`
    /// (optional override).
    ///
    /// # Errors
    /// `SourceError::Config` if the credential variable is missing or empty
    pub fn from_env() -> Result<Self, SourceError> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                SourceError::config(format!("environment variable {} is not set", API_KEY_ENV))
            })?;

        let mut config = Self::new(ApiKey::new(key));
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint;
            }
        }
        Ok(config)
    }

    /// Override the service endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Install a request timeout; expiry surfaces as
    /// [`SourceError::Unavailable`]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the service's sampling-with-replacement default
    pub fn with_replacement(mut self, replacement: bool) -> Self {
        self.replacement = Some(replacement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret-key");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(format!("{}", key), "***");
    }

    #[test]
    fn test_config_debug_never_shows_secret() {
        let config = SourceConfig::new(ApiKey::new("super-secret-key"));
        let dump = format!("{:?}", config);
        assert!(!dump.contains("super-secret-key"));
    }

    #[test]
    fn test_api_key_serializes_for_the_wire() {
        // The only surface where the secret is allowed to appear
        let key = ApiKey::new("wire-key");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"wire-key\"");
    }

    #[test]
    fn test_config_defaults() {
        let config = SourceConfig::new(ApiKey::new("k"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.timeout.is_none());
        assert!(config.replacement.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = SourceConfig::new(ApiKey::new("k"))
            .with_endpoint("http://localhost:9000/invoke")
            .with_timeout(Duration::from_secs(5))
            .with_replacement(false);
        assert_eq!(config.endpoint, "http://localhost:9000/invoke");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.replacement, Some(false));
    }
}
