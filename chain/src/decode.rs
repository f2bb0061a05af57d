//! Decoding of gateway JSON payloads into domain values.
//!
//! DESIGN
//! ======
//! The gateway returns decoded call results as loose JSON. Two lenient rules
//! keep this boundary stable across gateway versions: uint256 fields may
//! arrive as JSON numbers or as decimal strings, and tuple arrays may arrive
//! as keyed objects or as positional arrays.

#[cfg(test)]
#[path = "decode_test.rs"]
mod decode_test;

use serde_json::Value;

use crate::address::Address;
use crate::campaign::{CampaignState, CampaignSummary, Tier};

/// Error produced when a gateway payload does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("expected a string, got {0}")]
    ExpectedString(String),
    #[error("expected an unsigned integer, got {0}")]
    ExpectedUint(String),
    #[error("expected an array, got {0}")]
    ExpectedArray(String),
    #[error("invalid address in payload: {0}")]
    BadAddress(String),
    #[error("state code {0} does not fit in uint8")]
    StateOutOfRange(u64),
    #[error("tuple element {index} missing field {field}")]
    MissingField { index: usize, field: &'static str },
}

fn type_name(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(_) => "bool".to_owned(),
        Value::Number(_) => "number".to_owned(),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_owned(),
        Value::Object(_) => "object".to_owned(),
    }
}

/// Decode a `string` return value.
///
/// # Errors
///
/// Returns [`DecodeError::ExpectedString`] for non-string payloads.
pub fn decode_string(value: &Value) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| DecodeError::ExpectedString(type_name(value)))
}

/// Decode a `uint256` return value from a JSON number or a decimal string.
///
/// # Errors
///
/// Returns [`DecodeError::ExpectedUint`] for negatives, non-integers, and
/// values that do not fit in `u64`.
pub fn decode_uint(value: &Value) -> Result<u64, DecodeError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| DecodeError::ExpectedUint(type_name(value))),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| DecodeError::ExpectedUint(type_name(value))),
        _ => Err(DecodeError::ExpectedUint(type_name(value))),
    }
}

/// Decode an `address` return value.
///
/// # Errors
///
/// Returns [`DecodeError::BadAddress`] for non-strings and malformed hex.
pub fn decode_address(value: &Value) -> Result<Address, DecodeError> {
    let raw = value
        .as_str()
        .ok_or_else(|| DecodeError::BadAddress(type_name(value)))?;
    Address::parse(raw).map_err(|e| DecodeError::BadAddress(e.to_string()))
}

/// Decode the campaign `state()` code.
///
/// # Errors
///
/// Returns an error for non-integers and values outside `u8` range.
pub fn decode_state(value: &Value) -> Result<CampaignState, DecodeError> {
    let code = decode_uint(value)?;
    let code = u8::try_from(code).map_err(|_| DecodeError::StateOutOfRange(code))?;
    Ok(CampaignState::from_code(code))
}

/// Pull one field of a tuple element, by key or by position.
fn tuple_field<'a>(
    element: &'a Value,
    index: usize,
    position: usize,
    keys: &[&'static str],
) -> Result<&'a Value, DecodeError> {
    match element {
        Value::Object(map) => keys
            .iter()
            .find_map(|k| map.get(*k))
            .ok_or(DecodeError::MissingField { index, field: keys[0] }),
        Value::Array(items) => items
            .get(position)
            .ok_or(DecodeError::MissingField { index, field: keys[0] }),
        _ => Err(DecodeError::MissingField { index, field: keys[0] }),
    }
}

/// Decode the `getTiers()` result.
///
/// # Errors
///
/// Returns an error if the payload is not an array of (name, amount,
/// backers) tuples in object or positional form.
pub fn decode_tiers(value: &Value) -> Result<Vec<Tier>, DecodeError> {
    let items = value
        .as_array()
        .ok_or_else(|| DecodeError::ExpectedArray(type_name(value)))?;
    items
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Ok(Tier {
                name: decode_string(tuple_field(element, index, 0, &["name"])?)?,
                amount: decode_uint(tuple_field(element, index, 1, &["amount"])?)?,
                backers: decode_uint(tuple_field(element, index, 2, &["backers"])?)?,
            })
        })
        .collect()
}

/// Decode a factory listing (`getAllCampaigns` / `getUserCampaigns`) result.
///
/// # Errors
///
/// Returns an error if the payload is not an array of (address, owner,
/// name, creationTime) tuples in object or positional form.
pub fn decode_campaigns(value: &Value) -> Result<Vec<CampaignSummary>, DecodeError> {
    let items = value
        .as_array()
        .ok_or_else(|| DecodeError::ExpectedArray(type_name(value)))?;
    items
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Ok(CampaignSummary {
                address: decode_address(tuple_field(
                    element,
                    index,
                    0,
                    &["campaignAddress", "address"],
                )?)?,
                owner: decode_address(tuple_field(element, index, 1, &["owner"])?)?,
                name: decode_string(tuple_field(element, index, 2, &["name"])?)?,
                creation_time: decode_uint(tuple_field(
                    element,
                    index,
                    3,
                    &["creationTime", "creation_time"],
                )?)?,
            })
        })
        .collect()
}
