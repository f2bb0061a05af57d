//! Chain gateway client for read-only contract calls.
//!
//! Thin HTTP wrapper over the gateway's `/v1/read` endpoint. Pure reason
//! extraction in `error_reason` for testability.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;

use std::time::Duration;

use chain::ReadCall;
use serde_json::Value;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("missing config: {var} not set")]
    MissingConfig { var: &'static str },
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("gateway request failed: {0}")]
    Request(String),
    #[error("gateway rejected call ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    #[error("gateway response parse failed: {0}")]
    Parse(String),
}

/// Outbound request/connect timeouts, shared with the wallet bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

pub(crate) fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

impl GatewayTimeouts {
    /// Read timeouts from `CHAIN_GATEWAY_REQUEST_TIMEOUT_SECS` and
    /// `CHAIN_GATEWAY_CONNECT_TIMEOUT_SECS`, defaulting to 30s/10s.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            request_secs: env_parse_u64("CHAIN_GATEWAY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CHAIN_GATEWAY_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug)]
pub struct ChainGateway {
    http: reqwest::Client,
    base_url: String,
}

impl ChainGateway {
    /// Build the gateway client from `CHAIN_GATEWAY_URL` plus the timeout
    /// env vars.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is unset or the HTTP client cannot be
    /// built.
    pub fn from_env() -> Result<Self, GatewayError> {
        let base_url = std::env::var("CHAIN_GATEWAY_URL")
            .map_err(|_| GatewayError::MissingConfig { var: "CHAIN_GATEWAY_URL" })?;
        Self::new(&base_url, GatewayTimeouts::from_env())
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: GatewayTimeouts) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| GatewayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Forward one read-only contract call and return the decoded JSON
    /// value the gateway produced.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-200 gateway response,
    /// or an unparseable body.
    pub async fn read(&self, call: &ReadCall) -> Result<Value, GatewayError> {
        let response = self
            .http
            .post(format!("{}/v1/read", self.base_url))
            .json(call)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        if status != 200 {
            return Err(GatewayError::Rejected { status, reason: error_reason(&text) });
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Pull the reason out of an upstream error body, `{ "error": "..." }`,
/// falling back to the raw body. Shared with the wallet bridge client.
pub(crate) fn error_reason(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no reason given".to_owned()
    } else {
        trimmed.to_owned()
    }
}
