//! Wire DTOs for contract reads, transactions, and deployments.
//!
//! DESIGN
//! ======
//! These types mirror the request bodies the client posts to `/api/chain/*`
//! and `/api/wallet/*` so serde round-trips stay lossless on both sides.
//! Method signatures travel as strings; the external gateway owns ABI
//! encoding, so params stay schema-free `serde_json::Value`s.

#[cfg(test)]
#[path = "call_test.rs"]
mod call_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::Address;

/// Read method signatures understood by the chain gateway.
///
/// Campaign instance methods plus the two factory listing methods.
pub mod methods {
    pub const NAME: &str = "name() view returns (string)";
    pub const DESCRIPTION: &str = "description() view returns (string)";
    pub const GOAL: &str = "goal() view returns (uint256)";
    pub const DEADLINE: &str = "deadline() view returns (uint256)";
    pub const BALANCE: &str = "getContractBalance() view returns (uint256)";
    pub const OWNER: &str = "owner() view returns (address)";
    pub const STATE: &str = "state() view returns (uint8)";
    pub const GET_TIERS: &str = "getTiers() view returns ((string,uint256,uint256)[])";
    pub const GET_ALL_CAMPAIGNS: &str =
        "getAllCampaigns() view returns ((address,address,string,uint256)[])";
    pub const GET_USER_CAMPAIGNS: &str =
        "getUserCampaigns(address) view returns ((address,address,string,uint256)[])";

    pub const ADD_TIER: &str = "addTier(string,uint256)";
    pub const REMOVE_TIER: &str = "removeTier(uint256)";
    pub const FUND: &str = "fund(uint256)";
}

/// One read-only contract call: target address, method signature, ordered
/// argument list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadCall {
    pub address: Address,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

impl ReadCall {
    #[must_use]
    pub fn new(address: Address, method: &str, params: Vec<Value>) -> Self {
        Self { address, method: method.to_owned(), params }
    }

    /// Stable cache key: identical address + method + args always produce
    /// the same key, so concurrent identical reads can share one result.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let params = serde_json::to_string(&self.params).unwrap_or_default();
        format!("{}|{}|{params}", self.address, self.method)
    }

    /// Rebuild the call from a stored cache key. The inverse of
    /// [`ReadCall::cache_key`]; used when a cached read is refetched after
    /// invalidation.
    #[must_use]
    pub fn from_cache_key(key: &str) -> Option<Self> {
        let mut parts = key.splitn(3, '|');
        let address = Address::parse(parts.next()?).ok()?;
        let method = parts.next()?.to_owned();
        let params = serde_json::from_str(parts.next()?).ok()?;
        Some(Self { address, method, params })
    }
}

/// A write call submitted through the wallet bridge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxRequest {
    pub address: Address,
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
    /// Native value to attach, for payable methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

/// Terminal status of a submitted transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Confirmed,
    Failed,
}

/// Wallet-bridge response for a submitted transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub status: TxStatus,
    /// Failure reason; absent on confirmation.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Constructor parameters for deploying a new campaign from the published
/// contract template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub name: String,
    pub description: String,
    pub goal: u64,
    pub duration_in_days: u64,
}
