use super::*;

fn addr(raw: &str) -> Address {
    Address::parse(raw).unwrap()
}

// =============================================================================
// wire types
// =============================================================================

#[test]
fn submit_body_flattens_transaction() {
    let from = addr("0x00112233445566778899aabbccddeeff00112233");
    let tx = TxRequest {
        address: addr("0xffeeddccbbaa99887766554433221100ffeeddcc"),
        method: "fund(uint256) payable".to_owned(),
        params: vec![serde_json::json!(2)],
        value: Some(50),
    };
    let body = serde_json::to_value(SubmitBody { from: &from, tx: &tx }).unwrap();

    assert_eq!(body["from"], "0x00112233445566778899aabbccddeeff00112233");
    assert_eq!(body["address"], "0xffeeddccbbaa99887766554433221100ffeeddcc");
    assert_eq!(body["method"], "fund(uint256) payable");
    assert_eq!(body["params"], serde_json::json!([2]));
    assert_eq!(body["value"], 50);
}

#[test]
fn submit_body_omits_absent_value() {
    let from = addr("0x00112233445566778899aabbccddeeff00112233");
    let tx = TxRequest {
        address: addr("0xffeeddccbbaa99887766554433221100ffeeddcc"),
        method: "removeTier(uint256)".to_owned(),
        params: vec![serde_json::json!(0)],
        value: None,
    };
    let body = serde_json::to_value(SubmitBody { from: &from, tx: &tx }).unwrap();
    assert!(body.get("value").is_none());
}

#[test]
fn deploy_body_carries_published_contract_pin() {
    let from = addr("0x00112233445566778899aabbccddeeff00112233");
    let request = DeployRequest {
        name: "Solar Farm".to_owned(),
        description: "Panels for the co-op".to_owned(),
        goal: 1000,
        duration_in_days: 30,
    };
    let body = serde_json::to_value(DeployBody {
        publisher: PUBLISHER,
        contract_id: CONTRACT_ID,
        version: CONTRACT_VERSION,
        from: &from,
        params: &request,
    })
    .unwrap();

    assert_eq!(body["publisher"], "0xB357314beCc756859bAF2976A59D00658C94F296");
    assert_eq!(body["contractId"], "Crowdfunding");
    assert_eq!(body["version"], "1.0.2");
    assert_eq!(body["params"]["name"], "Solar Farm");
    assert_eq!(body["params"]["goal"], 1000);
}

// =============================================================================
// parse_address_body
// =============================================================================

#[test]
fn parse_address_body_canonicalizes() {
    let parsed = parse_address_body(r#"{"address":"0x00112233445566778899AABBCCDDEEFF00112233"}"#).unwrap();
    assert_eq!(parsed.to_string(), "0x00112233445566778899aabbccddeeff00112233");
}

#[test]
fn parse_address_body_rejects_garbage() {
    assert!(parse_address_body(r#"{"address":"not-an-address"}"#).is_err());
    assert!(parse_address_body("[]").is_err());
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn from_env_without_url_errors() {
    unsafe { std::env::remove_var("WALLET_BRIDGE_URL") };
    let err = WalletBridge::from_env().unwrap_err().to_string();
    assert!(err.contains("WALLET_BRIDGE_URL"));
}
