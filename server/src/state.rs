//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two outbound HTTP clients: the chain gateway for read-only
//! contract calls and the wallet bridge for connect/sign flows. Both are
//! Arc-wrapped so cloning per request is cheap.

use std::sync::Arc;

use crate::services::gateway::ChainGateway;
use crate::services::wallet::WalletBridge;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ChainGateway>,
    pub wallet: Arc<WalletBridge>,
}

impl AppState {
    #[must_use]
    pub fn new(gateway: ChainGateway, wallet: WalletBridge) -> Self {
        Self { gateway: Arc::new(gateway), wallet: Arc::new(wallet) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::gateway::GatewayTimeouts;

    /// `AppState` pointed at unroutable local endpoints. Nothing connects
    /// unless a test explicitly issues a request.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let timeouts = GatewayTimeouts { request_secs: 1, connect_secs: 1 };
        let gateway = ChainGateway::new("http://127.0.0.1:9/gateway", timeouts)
            .expect("client build should not fail");
        let wallet = WalletBridge::new("http://127.0.0.1:9/bridge", timeouts)
            .expect("client build should not fail");
        AppState::new(gateway, wallet)
    }
}
