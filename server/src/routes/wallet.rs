//! Wallet routes: cookie-backed session plus bridge proxies.
//!
//! DESIGN
//! ======
//! The connected account lives in an HttpOnly cookie holding the canonical
//! address. Signing never touches this process; the tx and deploy routes
//! forward to the wallet bridge with the cookie account as the sender.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chain::{Address, DeployRequest, TxReceipt, TxRequest};
use serde::Serialize;
use serde_json::Value;
use time::Duration;

use crate::routes::chain::error_body;
use crate::state::AppState;

const COOKIE_NAME: &str = "wallet_address";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_URL")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

/// Parse a cookie value into the connected account. Empty, stale, or
/// mangled cookies read as no session.
pub(crate) fn session_address(raw: &str) -> Option<Address> {
    if raw.is_empty() {
        return None;
    }
    Address::parse(raw).ok()
}

// =============================================================================
// WALLET EXTRACTOR
// =============================================================================

/// Connected wallet account extracted from the session cookie.
/// Use as a handler parameter to require a connected wallet.
pub struct WalletAccount(pub Address);

impl<S> axum::extract::FromRequestParts<S> for WalletAccount
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let raw = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        session_address(raw)
            .map(Self)
            .ok_or((StatusCode::UNAUTHORIZED, Json(error_body("wallet not connected"))))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub address: Option<Address>,
}

/// `GET /api/wallet/session`: the cookie-backed account, if any.
pub async fn session(jar: CookieJar) -> Json<SessionResponse> {
    let address = jar
        .get(COOKIE_NAME)
        .map(Cookie::value)
        .and_then(session_address);
    Json(SessionResponse { address })
}

/// `POST /api/wallet/connect`: connect via the bridge, set the cookie,
/// return the account address.
pub async fn connect(State(state): State<AppState>, jar: CookieJar) -> Response {
    match state.wallet.connect().await {
        Ok(address) => {
            let cookie = Cookie::build((COOKIE_NAME, address.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(cookie_secure());
            let jar = jar.add(cookie);
            (jar, Json(serde_json::json!({ "address": address }))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "wallet connect failed");
            (StatusCode::BAD_GATEWAY, Json(error_body(&e.to_string()))).into_response()
        }
    }
}

/// `POST /api/wallet/disconnect`: clear the session cookie.
pub async fn disconnect(jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO);
    (jar.add(cookie), StatusCode::NO_CONTENT)
}

/// `POST /api/wallet/tx`: submit a transaction for the connected account.
pub async fn submit_tx(
    State(state): State<AppState>,
    WalletAccount(from): WalletAccount,
    Json(tx): Json<TxRequest>,
) -> Result<Json<TxReceipt>, (StatusCode, Json<Value>)> {
    match state.wallet.submit(&from, &tx).await {
        Ok(receipt) => Ok(Json(receipt)),
        Err(e) => {
            tracing::error!(error = %e, method = %tx.method, "transaction submission failed");
            Err((StatusCode::BAD_GATEWAY, Json(error_body(&e.to_string()))))
        }
    }
}

/// `POST /api/wallet/deploy`: deploy a campaign for the connected account
/// and return the new contract address.
pub async fn deploy(
    State(state): State<AppState>,
    WalletAccount(from): WalletAccount,
    Json(request): Json<DeployRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.wallet.deploy(&from, &request).await {
        Ok(address) => Ok(Json(serde_json::json!({ "address": address }))),
        Err(e) => {
            tracing::error!(error = %e, name = %request.name, "campaign deployment failed");
            Err((StatusCode::BAD_GATEWAY, Json(error_body(&e.to_string()))))
        }
    }
}
