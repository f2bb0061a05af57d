//! Keyed read-query cache shared across views.
//!
//! DESIGN
//! ======
//! Each distinct `address|method|params` key owns one `RwSignal`. Every view
//! that issues the same read gets the same signal back, so N cards asking
//! for the same field produce one request, and a value resolved on one page
//! is already present when the next page asks. After a confirmed mutation
//! the affected signals are reset in place rather than dropped, so every
//! mounted subscriber sees the refetched value through its existing signal.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use std::collections::HashMap;

use chain::{Address, RemoteData};
use leptos::prelude::*;
use serde_json::Value;

/// Shared map of in-flight and resolved contract reads.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<String, RwSignal<RemoteData<Value>>>,
}

impl QueryCache {
    /// The signal already registered for this key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<RwSignal<RemoteData<Value>>> {
        self.entries.get(key).copied()
    }

    /// Register a signal for a key. The caller owns kicking off the fetch.
    pub fn insert(&mut self, key: String, signal: RwSignal<RemoteData<Value>>) {
        self.entries.insert(key, signal);
    }

    /// Reset every cached read against one contract address back to
    /// `Loading` and return the affected entries so the caller can
    /// refetch them. Entries stay registered: mounted views keep their
    /// signal and see the refreshed value when the refetch lands.
    pub fn invalidate_address(
        &self,
        address: &Address,
    ) -> Vec<(String, RwSignal<RemoteData<Value>>)> {
        let affected: Vec<_> = self
            .entries
            .iter()
            .filter(|(key, _)| key_is_for_address(key, address))
            .map(|(key, signal)| (key.clone(), *signal))
            .collect();
        for (_, signal) in &affected {
            signal.set(RemoteData::Loading);
        }
        affected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a cache key belongs to a contract address. Keys are produced by
/// `ReadCall::cache_key` as `address|method|params`.
#[must_use]
pub fn key_is_for_address(key: &str, address: &Address) -> bool {
    key.split('|').next() == Some(address.as_str())
}
