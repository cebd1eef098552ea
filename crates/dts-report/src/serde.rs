use std::collections::BTreeMap;
use std::iter::FromIterator;

use ::serde::{Deserialize, Serialize};
use dts_core::{ErrorInfo, SyncError};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> SyncError {
    SyncError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ordered = BTreeMap::new();
            for (key, val) in map {
                ordered.insert(key, canonicalize(val));
            }
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into compact canonical JSON bytes with sorted keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SyncError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Serializes a value into pretty canonical JSON terminated by a newline,
/// the on-disk form of every artifact.
pub fn to_canonical_json_pretty<T: Serialize>(value: &T) -> Result<String, SyncError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let mut text = serde_json::to_string_pretty(&canonicalize(value))
        .map_err(|err| serde_error("json-write", err))?;
    text.push('\n');
    Ok(text)
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, SyncError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}
