//! Page components, one per route.

pub mod campaign;
pub mod dashboard;
pub mod home;

use chain::Address;

/// Parse an address-valued route param. `None` for absent or mangled
/// values, which pages render as their not-found state.
pub(crate) fn route_address(raw: Option<String>) -> Option<Address> {
    raw.and_then(|raw| Address::parse(&raw).ok())
}
