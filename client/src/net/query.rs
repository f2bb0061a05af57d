//! The read-query hook: contract reads as shared reactive signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page and card issues its reads through [`contract_read`]. The hook
//! resolves each `address|method|params` key to a single `RwSignal` held in
//! the shared [`QueryCache`] context, so concurrent identical reads collapse
//! into one request and resolved values survive navigation between views.

use chain::{Address, ReadCall, RemoteData};
use leptos::prelude::*;
use serde_json::Value;

use crate::state::cache::QueryCache;

/// Issue (or join) a read-only contract call and get its reactive result.
///
/// Returns an existing signal when the same call is already cached or in
/// flight; otherwise registers a new `Loading` signal and spawns the fetch.
/// On SSR the signal simply stays `Loading`.
pub fn contract_read(
    address: Address,
    method: &str,
    params: Vec<Value>,
) -> RwSignal<RemoteData<Value>> {
    let cache = expect_context::<RwSignal<QueryCache>>();
    let call = ReadCall::new(address, method, params);
    let key = call.cache_key();

    if let Some(existing) = cache.get_untracked().get(&key) {
        return existing;
    }

    let signal = RwSignal::new(RemoteData::Loading);
    cache.update(|c| c.insert(key, signal));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::contract_read(&call).await;
        signal.set(result.into());
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = call;

    signal
}

/// Reset all cached reads against one contract to `Loading` and refetch
/// them. Called after a confirmed mutation (tier added/removed/funded,
/// campaign deployed).
///
/// Signals stay registered and are updated in place, so views currently
/// rendering the stale data pick up the refetched value without a
/// remount.
///
/// Takes the cache signal explicitly: mutation callbacks run inside spawned
/// futures, where the reactive context is no longer reachable.
pub fn invalidate_contract(cache: RwSignal<QueryCache>, address: &Address) {
    let affected = cache.with_untracked(|c| c.invalidate_address(address));
    #[cfg(feature = "hydrate")]
    for (key, signal) in affected {
        let Some(call) = ReadCall::from_cache_key(&key) else {
            continue;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::contract_read(&call).await;
            signal.set(result.into());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = affected;
}
