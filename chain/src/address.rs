//! Contract and account addresses in canonical form.
//!
//! DESIGN
//! ======
//! Addresses arrive from route params, cookies, and gateway payloads in
//! whatever casing the source used. Everything downstream (owner gating,
//! cache keys, serde) compares addresses, so parsing normalizes to lowercase
//! once and equality stays a plain string compare.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a string is not a valid 20-byte hex address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Missing the `0x` prefix.
    #[error("address must start with 0x: {0:?}")]
    MissingPrefix(String),
    /// Wrong number of hex digits after the prefix.
    #[error("address must have 40 hex digits, got {0}")]
    BadLength(usize),
    /// A non-hex character in the digit portion.
    #[error("address contains a non-hex character")]
    BadDigit,
}

/// A 20-byte EVM address held in canonical lowercase `0x...` form.
///
/// Parsing is case-insensitive; two addresses that differ only in casing
/// compare equal because both normalize at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    /// Parse and normalize an address string.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] if the input is not `0x` + 40 hex digits.
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let trimmed = raw.trim();
        let Some(digits) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        else {
            return Err(AddressError::MissingPrefix(trimmed.to_owned()));
        };
        if digits.len() != 40 {
            return Err(AddressError::BadLength(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::BadDigit);
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    /// Canonical lowercase string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
