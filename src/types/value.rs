//! The closed set of value kinds that can be hashed.

use std::collections::BTreeMap;

use super::digest::ObjectDigest;

/// A hashable value.
///
/// Mappings are keyed by unique strings. Numbers are IEEE-754 doubles; there
/// is no separate integer kind, so `1` and `1.0` hash identically.
///
/// Values are owned trees and cannot contain cycles.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value (`null`).
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// UTF-8 string. A string of the form `**REDACTED**<64 hex>` is treated
    /// as an embedded digest, exactly like [`Value::Redacted`].
    String(String),
    /// Double-precision number.
    Number(f64),
    /// Ordered list.
    Sequence(Vec<Value>),
    /// String-keyed mapping. Key order never affects the digest.
    Mapping(BTreeMap<String, Value>),
    /// A precomputed digest embedded verbatim in place of the value it stands for.
    Redacted(ObjectDigest),
}

impl Value {
    /// Short name of the value kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Redacted(_) => "redacted",
        }
    }

    /// Whether this is a container (sequence or mapping).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    /// Empty mapping.
    pub fn mapping() -> Self {
        Value::Mapping(BTreeMap::new())
    }

    /// Insert into a mapping, returning `self` for chaining.
    ///
    /// Converts `self` into an empty mapping first if it is any other kind.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if !matches!(self, Value::Mapping(_)) {
            self = Value::mapping();
        }
        if let Value::Mapping(map) = &mut self {
            map.insert(key.into(), value.into());
        }
        self
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                /// Integers are hashed as doubles. Magnitudes above 2^53 lose precision.
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<ObjectDigest> for Value {
    fn from(digest: ObjectDigest) -> Self {
        Value::Redacted(digest)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Nil)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_conversion_is_float() {
        assert_eq!(Value::from(3i32), Value::Number(3.0));
        assert_eq!(Value::from(3u64), Value::from(3.0f64));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<bool>), Value::Nil);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn test_with_entry_builds_mapping() {
        let value = Value::mapping().with_entry("a", 1).with_entry("b", vec![1, 2]);
        match value {
            Value::Mapping(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map["b"], Value::Sequence(vec![1.into(), 2.into()]));
            }
            other => panic!("expected mapping, got {}", other.kind()),
        }
    }

    #[test]
    fn test_with_entry_replaces_non_mapping() {
        let value = Value::Nil.with_entry("k", true);
        assert_eq!(value, Value::mapping().with_entry("k", true));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Nil.kind(), "nil");
        assert_eq!(Value::from(vec![1]).kind(), "sequence");
        assert!(Value::mapping().is_container());
        assert!(!Value::from("s").is_container());
    }
}
