//! Adapters from JSON and serde types into [`Value`].
//!
//! JSON maps directly onto the value model: `null` is nil, numbers become
//! doubles, arrays become sequences and objects become mappings. Any type
//! implementing `Serialize` can be hashed by going through `serde_json::Value`
//! first; serde's own restrictions apply (map keys must serialize as strings).

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::canonical::{object_hash, HashError};
use crate::types::{HashOptions, ObjectDigest, Value};

impl TryFrom<&JsonValue> for Value {
    type Error = HashError;

    fn try_from(json: &JsonValue) -> Result<Self, Self::Error> {
        Ok(match json {
            JsonValue::Null => Value::Nil,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Number(n) => Value::Number(
                n.as_f64()
                    .ok_or_else(|| HashError::unknown_type(format!("number {n}")))?,
            ),
            JsonValue::Array(items) => Value::Sequence(
                items
                    .iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, HashError>>()?,
            ),
            JsonValue::Object(map) => Value::Mapping(
                map.iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k.clone(), v)))
                    .collect::<Result<BTreeMap<_, _>, HashError>>()?,
            ),
        })
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = HashError;

    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        Value::try_from(&json)
    }
}

/// Hash a JSON document.
pub fn object_hash_json(json: &JsonValue, options: &HashOptions) -> Result<ObjectDigest, HashError> {
    object_hash(&Value::try_from(json)?, options)
}

/// Parse JSON text and hash the resulting document.
///
/// Formatting and key order in the text have no effect on the digest.
///
/// ```rust
/// use object_hash::{object_hash_str, HashOptions};
///
/// let options = HashOptions::default();
/// let a = object_hash_str(r#"{"a": 1, "b": [1, 2, 3]}"#, &options).unwrap();
/// let b = object_hash_str(r#"{ "b": [1, 2, 3.0], "a": 1.0 }"#, &options).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn object_hash_str(text: &str, options: &HashOptions) -> Result<ObjectDigest, HashError> {
    let json: JsonValue = serde_json::from_str(text)?;
    object_hash_json(&json, options)
}

/// Hash any serializable value through its JSON representation.
pub fn object_hash_serialize<T: Serialize + ?Sized>(
    value: &T,
    options: &HashOptions,
) -> Result<ObjectDigest, HashError> {
    let json = serde_json::to_value(value)?;
    object_hash_json(&json, options)
}
