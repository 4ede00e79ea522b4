//! Field access over decoded reports with falsy-to-default fallbacks
//!
//! Every accessor treats a falsy value (`null`, `false`, `0`, `""`) exactly
//! like a missing key. A report that states `"addressed_tiles_count": 0` is
//! therefore indistinguishable from one that omits the key. Values of the
//! wrong kind (a string where a number is expected) also fall back. Whole
//! floats such as `14.0` count as integers.

use crate::io::configuration::NOT_AVAILABLE;
use serde_json::Value;
use std::collections::BTreeMap;

/// Whether `value` counts as absent
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Value under `key` unless it is missing or falsy
///
/// Non-object `data` has no keys, so everything falls back.
pub fn truthy<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|value| !is_falsy(value))
}

/// Floating point value under `key`, or `0.0`
pub fn number_or_zero(data: &Value, key: &str) -> f64 {
    truthy(data, key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Non-negative integer under `key`, or `0`
pub fn count_or_zero(data: &Value, key: &str) -> u64 {
    truthy(data, key).and_then(whole_number).unwrap_or(0)
}

/// Zoom level under `key` if it fits a `u8`
pub fn zoom(data: &Value, key: &str) -> Option<u8> {
    truthy(data, key)
        .and_then(whole_number)
        .and_then(|level| u8::try_from(level).ok())
}

/// Non-negative whole number, spelled either `14` or `14.0`
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && (0.0..U64_LIMIT).contains(n))
            .map(|n| n as u64)
    })
}

/// First float past the `u64` range
const U64_LIMIT: f64 = u64::MAX as f64;

/// Text under `key`, or the `"N/A"` sentinel
///
/// Truthy non-string values are kept as their JSON text.
pub fn text_or_sentinel(data: &Value, key: &str) -> String {
    match truthy(data, key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Elements of the array under `key`, or nothing
pub fn items<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    truthy(data, key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Entries of the object under `key`, or an empty map
pub fn entries(data: &Value, key: &str) -> BTreeMap<String, Value> {
    truthy(data, key)
        .and_then(Value::as_object)
        .map(|object| {
            object
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}
