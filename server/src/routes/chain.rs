//! Read proxy: forwards contract reads to the chain gateway.

#[cfg(test)]
#[path = "chain_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use chain::ReadCall;
use serde_json::Value;

use crate::state::AppState;

/// JSON error body shared by the API routes.
pub(crate) fn error_body(reason: &str) -> Value {
    serde_json::json!({ "error": reason })
}

/// `POST /api/chain/read`: forward one read-only contract call.
pub async fn read(
    State(state): State<AppState>,
    Json(call): Json<ReadCall>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.gateway.read(&call).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            tracing::error!(error = %e, method = %call.method, "contract read failed");
            Err((StatusCode::BAD_GATEWAY, Json(error_body(&e.to_string()))))
        }
    }
}
