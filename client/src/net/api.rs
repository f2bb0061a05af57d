//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads and writes return `Result<_, String>` so callers can thread the
//! reason into `RemoteData::Failed` or a form's error state instead of
//! losing it to a console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chain::{Address, DeployRequest, ReadCall, TxReceipt, TxRequest};
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use serde_json::Value;

#[cfg(any(test, feature = "hydrate"))]
fn read_failed_message(status: u16) -> String {
    format!("contract read failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn tx_failed_message(status: u16) -> String {
    format!("transaction submission failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn deploy_failed_message(status: u16) -> String {
    format!("deployment failed: {status}")
}

/// Error body returned by the server's API routes.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Prefer the server's error reason over a bare status code.
#[cfg(any(test, feature = "hydrate"))]
fn error_reason(body: &str, fallback: String) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or(fallback)
}

/// Fetch the connected wallet account from `GET /api/wallet/session`.
/// Returns `None` if disconnected or on the server.
pub async fn fetch_wallet_session() -> Option<Address> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct SessionResponse {
            address: Option<String>,
        }
        let resp = gloo_net::http::Request::get("/api/wallet/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: SessionResponse = resp.json().await.ok()?;
        body.address.and_then(|raw| Address::parse(&raw).ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Connect a wallet via `POST /api/wallet/connect`.
///
/// # Errors
///
/// Returns an error string if the bridge refuses or the request fails.
pub async fn wallet_connect() -> Result<Address, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct ConnectResponse {
            address: String,
        }
        let resp = gloo_net::http::Request::post("/api/wallet/connect")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_reason(&body, format!("wallet connect failed: {status}")));
        }
        let body: ConnectResponse = resp.json().await.map_err(|e| e.to_string())?;
        Address::parse(&body.address).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Disconnect the wallet via `POST /api/wallet/disconnect`.
pub async fn wallet_disconnect() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/wallet/disconnect")
            .send()
            .await;
    }
}

/// Issue one read-only contract call via `POST /api/chain/read`.
///
/// # Errors
///
/// Returns the gateway's reason on failure, or a status-code message when
/// no reason is available.
pub async fn contract_read(call: &ReadCall) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/chain/read")
            .json(call)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_reason(&body, read_failed_message(status)));
        }
        resp.json::<Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = call;
        Err("not available on server".to_owned())
    }
}

/// Submit a transaction through `POST /api/wallet/tx`.
///
/// # Errors
///
/// Returns an error string if the wallet is not connected, the bridge
/// rejects the submission, or the request fails.
pub async fn send_transaction(tx: &TxRequest) -> Result<TxReceipt, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/wallet/tx")
            .json(tx)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_reason(&body, tx_failed_message(status)));
        }
        resp.json::<TxReceipt>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tx;
        Err("not available on server".to_owned())
    }
}

/// Deploy a new campaign through `POST /api/wallet/deploy`.
/// Returns the deployed contract address.
///
/// # Errors
///
/// Returns an error string on validation, bridge, or request failure;
/// the modal surfaces it in its error state.
pub async fn deploy_campaign(req: &DeployRequest) -> Result<Address, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(Deserialize)]
        struct DeployResponse {
            address: String,
        }
        let resp = gloo_net::http::Request::post("/api/wallet/deploy")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(error_reason(&body, deploy_failed_message(status)));
        }
        let body: DeployResponse = resp.json().await.map_err(|e| e.to_string())?;
        Address::parse(&body.address).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}
