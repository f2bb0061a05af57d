use super::*;
use chain::ReadCall;
use chain::call::methods;

fn addr(raw: &str) -> Address {
    Address::parse(raw).unwrap()
}

const CAMPAIGN: &str = "0x00112233445566778899aabbccddeeff00112233";
const OTHER: &str = "0xb357314becc756859baf2976a59d00658c94f296";

// =============================================================
// Key ownership
// =============================================================

#[test]
fn cache_key_matches_its_own_address() {
    let call = ReadCall::new(addr(CAMPAIGN), methods::NAME, vec![]);
    assert!(key_is_for_address(&call.cache_key(), &addr(CAMPAIGN)));
}

#[test]
fn cache_key_does_not_match_another_address() {
    let call = ReadCall::new(addr(CAMPAIGN), methods::NAME, vec![]);
    assert!(!key_is_for_address(&call.cache_key(), &addr(OTHER)));
}

#[test]
fn address_match_is_exact_not_prefix() {
    // A key whose address merely starts with the other address must not match.
    let key = format!("{CAMPAIGN}00|{}|[]", methods::NAME);
    assert!(!key_is_for_address(&key, &addr(CAMPAIGN)));
}

#[test]
fn param_bearing_keys_still_match_by_address() {
    let call = ReadCall::new(
        addr(CAMPAIGN),
        methods::GET_USER_CAMPAIGNS,
        vec![serde_json::json!(OTHER)],
    );
    // Params mention another address; only the call target counts.
    assert!(key_is_for_address(&call.cache_key(), &addr(CAMPAIGN)));
    assert!(!key_is_for_address(&call.cache_key(), &addr(OTHER)));
}

// =============================================================
// Cache map
// =============================================================

#[test]
fn default_cache_is_empty() {
    let cache = QueryCache::default();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert!(cache.get("missing").is_none());
}

// =============================================================
// Invalidation
// =============================================================

#[test]
fn invalidation_resets_shared_signals_in_place() {
    let owner = Owner::new();
    owner.set();
    let mut cache = QueryCache::default();
    let call = ReadCall::new(addr(CAMPAIGN), methods::GET_TIERS, vec![]);
    // The signal a mounted view captured when it first issued the read.
    let mounted = RwSignal::new(RemoteData::Loaded(serde_json::json!([["Gold", 100, 1]])));
    cache.insert(call.cache_key(), mounted);

    let affected = cache.invalidate_address(&addr(CAMPAIGN));

    assert_eq!(affected.len(), 1);
    assert!(mounted.get_untracked().is_loading());
}

#[test]
fn invalidation_keeps_entries_registered() {
    let owner = Owner::new();
    owner.set();
    let mut cache = QueryCache::default();
    let call = ReadCall::new(addr(CAMPAIGN), methods::GET_TIERS, vec![]);
    let mounted = RwSignal::new(RemoteData::Loaded(serde_json::json!([])));
    cache.insert(call.cache_key(), mounted);

    cache.invalidate_address(&addr(CAMPAIGN));

    // The next read for the same key joins the same signal, so the
    // mounted view and any later view converge on one refetched value.
    let rejoined = cache.get(&call.cache_key()).unwrap();
    rejoined.set(RemoteData::Loaded(serde_json::json!([["Silver", 50, 2]])));
    assert_eq!(
        mounted.get_untracked().value(),
        Some(&serde_json::json!([["Silver", 50, 2]]))
    );
}

#[test]
fn invalidation_leaves_other_contracts_untouched() {
    let owner = Owner::new();
    owner.set();
    let mut cache = QueryCache::default();
    let target = ReadCall::new(addr(CAMPAIGN), methods::BALANCE, vec![]);
    let other = ReadCall::new(addr(OTHER), methods::BALANCE, vec![]);
    cache.insert(target.cache_key(), RwSignal::new(RemoteData::Loaded(serde_json::json!(250))));
    let untouched = RwSignal::new(RemoteData::Loaded(serde_json::json!(900)));
    cache.insert(other.cache_key(), untouched);

    let affected = cache.invalidate_address(&addr(CAMPAIGN));

    assert_eq!(affected.len(), 1);
    assert_eq!(affected[0].0, target.cache_key());
    assert_eq!(untouched.get_untracked().value(), Some(&serde_json::json!(900)));
}
