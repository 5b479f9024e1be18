//! JSON-RPC wire types for the random.org v1 API
//!
//! Request shape (method `generateIntegers`):
//!
//! ```json
//! {
//!   "jsonrpc": "2.0",
//!   "method": "generateIntegers",
//!   "params": {"apiKey": "...", "n": 5, "min": 1, "max": 100},
//!   "id": "<uuid-v4>"
//! }
//! ```
//!
//! Only `result.random.data` is contractually required of the response;
//! the bookkeeping fields the service sends alongside are tolerated as
//! optional.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ApiKey, SourceConfig};
use crate::params::QueryParams;

/// JSON-RPC method name for integer generation
pub const GENERATE_INTEGERS: &str = "generateIntegers";

/// Outgoing JSON-RPC request envelope
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub params: GenerateIntegersParams,
    /// Unique request identifier, a fresh UUID v4 per request
    pub id: Uuid,
}

/// Parameters of the `generateIntegers` call
///
/// Composed immutably from the caller's [`QueryParams`] and the
/// separately-sourced credential; caller-owned data is never mutated.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateIntegersParams {
    pub api_key: ApiKey,
    pub n: u32,
    pub min: i64,
    pub max: i64,
    /// Serialized only when the config overrides the service default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<bool>,
}

impl RpcRequest {
    /// Build a `generateIntegers` request from validated params and config
    pub fn generate_integers(params: &QueryParams, config: &SourceConfig) -> Self {
        Self {
            jsonrpc: "2.0",
            method: GENERATE_INTEGERS,
            params: GenerateIntegersParams {
                api_key: config.api_key.clone(),
                n: params.n(),
                min: params.min(),
                max: params.max(),
                replacement: config.replacement,
            },
            id: Uuid::new_v4(),
        }
    }
}

/// Incoming JSON-RPC response envelope
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<RpcResult>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// The `result` member of a successful response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcResult {
    pub random: RandomData,
    /// Quota bookkeeping, optional and unused beyond diagnostics
    #[serde(default)]
    pub bits_used: Option<u64>,
    #[serde(default)]
    pub bits_left: Option<u64>,
    #[serde(default)]
    pub requests_left: Option<u64>,
    #[serde(default)]
    pub advisory_delay: Option<u64>,
}

/// The `result.random` object carrying the generated integers
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomData {
    pub data: Vec<i64>,
    /// Opaque service timestamp; not RFC3339, carried verbatim
    #[serde(default)]
    pub completion_time: Option<String>,
}

/// The `error` member of a failed response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    /// Check if this error code is in the service's key-quota family
    pub fn is_quota(&self) -> bool {
        matches!(self.code, 402 | 403)
    }

    /// Extract the advisory back-off delay (milliseconds) when present
    pub fn advisory_delay(&self) -> Option<u64> {
        self.data
            .as_ref()
            .and_then(|d| d.get("advisoryDelay"))
            .and_then(|v| v.as_u64())
    }
}
