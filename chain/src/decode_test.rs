use super::*;
use serde_json::json;

const CAMPAIGN: &str = "0x00112233445566778899aabbccddeeff00112233";
const OWNER: &str = "0xB357314beCc756859bAF2976A59D00658C94F296";

// =============================================================
// Scalars
// =============================================================

#[test]
fn decode_string_accepts_strings_only() {
    assert_eq!(decode_string(&json!("Solar Farm")).unwrap(), "Solar Farm");
    assert!(decode_string(&json!(42)).is_err());
    assert!(decode_string(&json!(null)).is_err());
}

#[test]
fn decode_uint_accepts_numbers_and_decimal_strings() {
    assert_eq!(decode_uint(&json!(1000)).unwrap(), 1000);
    assert_eq!(decode_uint(&json!("1000")).unwrap(), 1000);
    assert_eq!(decode_uint(&json!(" 250 ")).unwrap(), 250);
    assert_eq!(decode_uint(&json!(0)).unwrap(), 0);
}

#[test]
fn decode_uint_rejects_negatives_and_garbage() {
    assert!(decode_uint(&json!(-1)).is_err());
    assert!(decode_uint(&json!(2.5)).is_err());
    assert!(decode_uint(&json!("0x10")).is_err());
    assert!(decode_uint(&json!([])).is_err());
}

#[test]
fn decode_address_normalizes_casing() {
    let addr = decode_address(&json!(OWNER)).unwrap();
    assert_eq!(addr.as_str(), OWNER.to_ascii_lowercase());
    assert!(decode_address(&json!("not-an-address")).is_err());
}

#[test]
fn decode_state_maps_codes() {
    assert_eq!(decode_state(&json!(0)).unwrap(), CampaignState::Active);
    assert_eq!(decode_state(&json!("1")).unwrap(), CampaignState::Successful);
    assert_eq!(decode_state(&json!(2)).unwrap(), CampaignState::Failed);
    assert_eq!(decode_state(&json!(7)).unwrap(), CampaignState::Unknown(7));
}

#[test]
fn decode_state_rejects_values_over_u8() {
    assert_eq!(
        decode_state(&json!(256)).unwrap_err(),
        DecodeError::StateOutOfRange(256)
    );
}

// =============================================================
// Tiers
// =============================================================

#[test]
fn decode_tiers_object_form() {
    let payload = json!([
        { "name": "Bronze", "amount": 50, "backers": 12 },
        { "name": "Gold", "amount": "500", "backers": "2" },
    ]);
    let tiers = decode_tiers(&payload).unwrap();
    assert_eq!(tiers.len(), 2);
    assert_eq!(tiers[0].name, "Bronze");
    assert_eq!(tiers[1].amount, 500);
    assert_eq!(tiers[1].backers, 2);
}

#[test]
fn decode_tiers_positional_form() {
    let payload = json!([["Bronze", 50, 12], ["Gold", "500", 2]]);
    let tiers = decode_tiers(&payload).unwrap();
    assert_eq!(tiers[0], Tier { name: "Bronze".to_owned(), amount: 50, backers: 12 });
    assert_eq!(tiers[1].name, "Gold");
}

#[test]
fn decode_tiers_empty_array() {
    assert!(decode_tiers(&json!([])).unwrap().is_empty());
}

#[test]
fn decode_tiers_rejects_non_arrays_and_short_tuples() {
    assert!(decode_tiers(&json!({})).is_err());
    assert_eq!(
        decode_tiers(&json!([["Bronze", 50]])).unwrap_err(),
        DecodeError::MissingField { index: 0, field: "backers" }
    );
}

// =============================================================
// Campaign listings
// =============================================================

#[test]
fn decode_campaigns_object_form_with_camel_case_keys() {
    let payload = json!([{
        "campaignAddress": CAMPAIGN,
        "owner": OWNER,
        "name": "Solar Farm",
        "creationTime": 1_700_000_000_u64,
    }]);
    let campaigns = decode_campaigns(&payload).unwrap();
    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns[0].address.as_str(), CAMPAIGN);
    assert_eq!(campaigns[0].owner.as_str(), OWNER.to_ascii_lowercase());
    assert_eq!(campaigns[0].name, "Solar Farm");
    assert_eq!(campaigns[0].creation_time, 1_700_000_000);
}

#[test]
fn decode_campaigns_positional_form() {
    let payload = json!([[CAMPAIGN, OWNER, "Solar Farm", "1700000000"]]);
    let campaigns = decode_campaigns(&payload).unwrap();
    assert_eq!(campaigns[0].creation_time, 1_700_000_000);
}

#[test]
fn decode_campaigns_preserves_input_order() {
    let payload = json!([
        [CAMPAIGN, OWNER, "First", 1],
        [OWNER, OWNER, "Second", 2],
    ]);
    let campaigns = decode_campaigns(&payload).unwrap();
    assert_eq!(campaigns[0].name, "First");
    assert_eq!(campaigns[1].name, "Second");
}

#[test]
fn decode_campaigns_rejects_bad_inner_address() {
    let payload = json!([["nope", OWNER, "X", 1]]);
    assert!(matches!(
        decode_campaigns(&payload).unwrap_err(),
        DecodeError::BadAddress(_)
    ));
}
