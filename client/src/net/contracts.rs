//! Well-known deployed contract addresses.

#[cfg(test)]
#[path = "contracts_test.rs"]
mod contracts_test;

use chain::Address;

/// The crowdfunding factory that enumerates and deploys campaign instances.
pub const CROWDFUNDING_FACTORY: &str = "0x4f3b2e8d9a6c715e0bd4fa2c9e8b1d3a5c7e9f01";

/// The factory address, parsed.
///
/// # Panics
///
/// Never panics: the constant is validated by tests.
#[must_use]
pub fn factory_address() -> Address {
    Address::parse(CROWDFUNDING_FACTORY).unwrap_or_else(|_| unreachable!("factory constant is valid"))
}
