//! reqwest-backed implementation of the number source
//!
//! One POST per fetch, no retry. Retry/backoff, if wanted, is layered by
//! callers around [`NumberSource`](super::NumberSource).

use async_trait::async_trait;
use tracing::{debug, warn};

use super::rpc::{RpcRequest, RpcResponse};
use super::{NumberList, NumberSource, SourceConfig, SourceError};
use crate::params::QueryParams;

/// Client for the random.org JSON-RPC v1 `generateIntegers` method
pub struct RandomOrgClient {
    client: reqwest::Client,
    config: SourceConfig,
}

impl RandomOrgClient {
    /// Create a client from the given configuration
    ///
    /// # Errors
    /// `SourceError::Config` if the underlying HTTP client cannot be built
    pub fn try_new(config: SourceConfig) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SourceError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a client, panicking on HTTP client construction failure
    ///
    /// Construction only fails on broken TLS backends; callers that want
    /// to handle that use [`RandomOrgClient::try_new`].
    pub fn new(config: SourceConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Map a decoded JSON-RPC response to the number list, enforcing the
    /// fetch postconditions
    fn check_response(
        params: &QueryParams,
        response: RpcResponse,
    ) -> Result<NumberList, SourceError> {
        if let Some(error) = response.error {
            if error.is_quota() {
                warn!(code = error.code, message = %error.message, "quota exhausted");
                return Err(SourceError::Quota {
                    advisory_delay: error.advisory_delay(),
                    code: error.code,
                    message: error.message,
                });
            }
            return Err(SourceError::protocol(format!(
                "service error: code={}, message={}",
                error.code, error.message
            )));
        }

        let result = response
            .result
            .ok_or_else(|| SourceError::protocol("response has neither result nor error"))?;
        let data = result.random.data;

        // Postconditions: exactly n values, each within [min, max]
        if data.len() != params.n() as usize {
            return Err(SourceError::protocol(format!(
                "expected {} integers, got {}",
                params.n(),
                data.len()
            )));
        }
        if let Some(out) = data.iter().find(|&&v| !params.contains(v)) {
            return Err(SourceError::protocol(format!(
                "value {} outside requested range [{}, {}]",
                out,
                params.min(),
                params.max()
            )));
        }

        Ok(data)
    }
}

#[async_trait]
impl NumberSource for RandomOrgClient {
    async fn fetch(&self, params: &QueryParams) -> Result<NumberList, SourceError> {
        let request = RpcRequest::generate_integers(params, &self.config);
        debug!(
            request_id = %request.id,
            n = params.n(),
            min = params.min(),
            max = params.max(),
            "requesting integers"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 429 {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "service rate limited the request");
            return Err(SourceError::Quota {
                code: i64::from(status.as_u16()),
                message: if body.is_empty() {
                    "rate limited".to_string()
                } else {
                    body
                },
                advisory_delay: None,
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::protocol(format!("HTTP {} - {}", status, body)));
        }

        let decoded: RpcResponse = response
            .json()
            .await
            .map_err(|e| SourceError::protocol(format!("undecodable response body: {}", e)))?;

        let data = Self::check_response(params, decoded)?;
        debug!(request_id = %request.id, count = data.len(), "received integers");
        Ok(data)
    }
}
