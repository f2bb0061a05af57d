use super::*;

// =============================================================================
// env_bool: uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_WB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_WB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_WB_INVALID_314__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_WB_SURELY_UNSET_XYZ__"), None);
}

// =============================================================================
// session_address
// =============================================================================

#[test]
fn session_address_empty_is_disconnected() {
    assert_eq!(session_address(""), None);
}

#[test]
fn session_address_garbage_is_disconnected() {
    assert_eq!(session_address("not-an-address"), None);
    assert_eq!(session_address("0x1234"), None);
}

#[test]
fn session_address_canonicalizes_cookie_value() {
    let parsed = session_address("0x00112233445566778899AABBCCDDEEFF00112233").unwrap();
    assert_eq!(parsed.to_string(), "0x00112233445566778899aabbccddeeff00112233");
}

// =============================================================================
// SessionResponse wire shape
// =============================================================================

#[test]
fn session_response_serializes_address_as_string() {
    let address = session_address("0x00112233445566778899aabbccddeeff00112233");
    let json = serde_json::to_value(SessionResponse { address }).unwrap();
    assert_eq!(json["address"], "0x00112233445566778899aabbccddeeff00112233");
}

#[test]
fn session_response_serializes_disconnected_as_null() {
    let json = serde_json::to_value(SessionResponse { address: None }).unwrap();
    assert!(json["address"].is_null());
}
