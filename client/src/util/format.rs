//! Address display helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chain::Address;

/// Truncated address for toolbar display, e.g. `0x4f3b…9f01`.
#[must_use]
pub fn short_address(address: &Address) -> String {
    let s = address.as_str();
    // Canonical addresses are always 42 chars; slicing is safe.
    format!("{}…{}", &s[..6], &s[s.len() - 4..])
}
