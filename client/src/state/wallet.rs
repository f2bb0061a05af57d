//! Wallet-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consumed by the navbar, the detail page's editing gate, and the dashboard.
//! The session is an explicit three-variant enum so "still resolving" and
//! "nobody connected" never blur into one `None`.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use chain::Address;

/// Connection state of the active wallet account.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WalletSession {
    /// Session lookup has not resolved yet.
    #[default]
    Loading,
    /// No account connected.
    Disconnected,
    /// Connected with the given account address.
    Connected(Address),
}

impl WalletSession {
    /// The connected account, if any.
    #[must_use]
    pub fn account(&self) -> Option<&Address> {
        match self {
            Self::Connected(address) => Some(address),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}
