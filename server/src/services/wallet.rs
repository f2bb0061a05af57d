//! Wallet bridge client: connect, transaction submission, deployment.
//!
//! SYSTEM CONTEXT
//! ==============
//! Key custody and signing live in the external bridge process; this client
//! only speaks its HTTP API. Deployment targets the published crowdfunding
//! factory, so the publisher/contract/version triple is pinned here.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod tests;

use std::time::Duration;

use chain::{Address, DeployRequest, TxReceipt, TxRequest};

use super::gateway::{GatewayTimeouts, error_reason};

/// Published contract identifier on the deploy registry.
pub const CONTRACT_ID: &str = "Crowdfunding";
/// Pinned release of the published contract.
pub const CONTRACT_VERSION: &str = "1.0.2";
/// Account that published the crowdfunding contract.
pub const PUBLISHER: &str = "0xB357314beCc756859bAF2976A59D00658C94F296";

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("missing config: {var} not set")]
    MissingConfig { var: &'static str },
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("bridge request failed: {0}")]
    Request(String),
    #[error("bridge rejected request ({status}): {reason}")]
    Rejected { status: u16, reason: String },
    #[error("bridge response parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct SubmitBody<'a> {
    from: &'a Address,
    #[serde(flatten)]
    tx: &'a TxRequest,
}

#[derive(serde::Serialize)]
struct DeployBody<'a> {
    publisher: &'a str,
    #[serde(rename = "contractId")]
    contract_id: &'a str,
    version: &'a str,
    from: &'a Address,
    params: &'a DeployRequest,
}

#[derive(serde::Deserialize)]
struct AddressBody {
    address: String,
}

fn parse_address_body(text: &str) -> Result<Address, BridgeError> {
    let body: AddressBody = serde_json::from_str(text).map_err(|e| BridgeError::Parse(e.to_string()))?;
    Address::parse(&body.address).map_err(|e| BridgeError::Parse(e.to_string()))
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug)]
pub struct WalletBridge {
    http: reqwest::Client,
    base_url: String,
}

impl WalletBridge {
    /// Build the bridge client from `WALLET_BRIDGE_URL` plus the shared
    /// timeout env vars.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is unset or the HTTP client cannot be
    /// built.
    pub fn from_env() -> Result<Self, BridgeError> {
        let base_url = std::env::var("WALLET_BRIDGE_URL")
            .map_err(|_| BridgeError::MissingConfig { var: "WALLET_BRIDGE_URL" })?;
        Self::new(&base_url, GatewayTimeouts::from_env())
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: GatewayTimeouts) -> Result<Self, BridgeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| BridgeError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// Ask the bridge for the active account.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a bridge rejection.
    pub async fn connect(&self) -> Result<Address, BridgeError> {
        let text = self.post_json("/v1/connect", &serde_json::json!({})).await?;
        parse_address_body(&text)
    }

    /// Submit one signed transaction on behalf of `from`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a bridge rejection; an
    /// on-chain revert comes back as a `Reverted` receipt, not an error.
    pub async fn submit(&self, from: &Address, tx: &TxRequest) -> Result<TxReceipt, BridgeError> {
        let body = SubmitBody { from, tx };
        let text = self.post_json("/v1/transactions", &body).await?;
        serde_json::from_str(&text).map_err(|e| BridgeError::Parse(e.to_string()))
    }

    /// Deploy a fresh campaign contract from the published factory and
    /// return its address.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a bridge rejection.
    pub async fn deploy(&self, from: &Address, request: &DeployRequest) -> Result<Address, BridgeError> {
        let body = DeployBody {
            publisher: PUBLISHER,
            contract_id: CONTRACT_ID,
            version: CONTRACT_VERSION,
            from,
            params: request,
        };
        let text = self.post_json("/v1/deployments", &body).await?;
        parse_address_body(&text)
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<String, BridgeError> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| BridgeError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BridgeError::Request(e.to_string()))?;

        if status != 200 {
            return Err(BridgeError::Rejected { status, reason: error_reason(&text) });
        }
        Ok(text)
    }
}
