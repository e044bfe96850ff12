//! The reserved `**REDACTED**` literal.
//!
//! A string of the form `**REDACTED**` followed by exactly 64 hex characters
//! is not hashed as a string. Its hex part is decoded and used as the digest
//! of whatever value it replaced. This lets a sensitive subtree be swapped
//! out for its digest without changing the digest of the enclosing document.
//!
//! Matching is case-insensitive over the whole literal, prefix included, so
//! `**redacted**ABCD...` is accepted too.

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::canonical::{object_hash, HashError};
use crate::types::{HashOptions, ObjectDigest, Value};

/// Prefix marking a redacted literal.
pub const REDACTED_PREFIX: &str = "**REDACTED**";

fn redacted_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\*\*REDACTED\*\*[0-9a-f]{64}$").expect("redacted literal pattern is valid")
    })
}

/// Whether `s` is a redacted literal.
pub fn is_redacted_literal(s: &str) -> bool {
    redacted_regex().is_match(s)
}

/// Decode the digest embedded in a redacted literal.
///
/// Returns `None` for any string that is not exactly a redacted literal.
pub fn parse_redacted(s: &str) -> Option<ObjectDigest> {
    if !is_redacted_literal(s) {
        return None;
    }
    ObjectDigest::from_hex(&s[REDACTED_PREFIX.len()..]).ok()
}

/// Render a digest as a redacted literal (lowercase hex).
pub fn redacted_literal(digest: &ObjectDigest) -> String {
    format!("{REDACTED_PREFIX}{}", digest.to_hex())
}

/// Replace a value with the redacted literal of its digest.
///
/// The returned value hashes to the same digest as `value` under `options`,
/// so it can stand in for `value` inside any larger document.
///
/// # Example
///
/// ```rust
/// use object_hash::{object_hash, redact, HashOptions, Value};
///
/// let options = HashOptions::default();
/// let secret = Value::from("hunter2");
/// let doc = Value::mapping().with_entry("password", secret.clone());
/// let redacted = Value::mapping().with_entry("password", redact(&secret, &options).unwrap());
///
/// assert_eq!(object_hash(&doc, &options).unwrap(), object_hash(&redacted, &options).unwrap());
/// ```
pub fn redact(value: &Value, options: &HashOptions) -> Result<Value, HashError> {
    let digest = object_hash(value, options)?;
    Ok(Value::String(redacted_literal(&digest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(hex: &str) -> String {
        format!("{REDACTED_PREFIX}{hex}")
    }

    #[test]
    fn test_parse_lowercase() {
        let hex = "ab".repeat(32);
        let digest = parse_redacted(&literal(&hex)).unwrap();
        assert_eq!(digest.as_bytes(), &[0xab; 32]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let hex = "AB".repeat(32);
        assert_eq!(
            parse_redacted(&literal(&hex)),
            Some(ObjectDigest::new([0xab; 32]))
        );
        let lower_prefix = format!("**redacted**{}", "cd".repeat(32));
        assert_eq!(
            parse_redacted(&lower_prefix),
            Some(ObjectDigest::new([0xcd; 32]))
        );
    }

    #[test]
    fn test_rejects_near_misses() {
        assert!(parse_redacted(&literal(&"ab".repeat(31))).is_none());
        assert!(parse_redacted(&literal(&"ab".repeat(33))).is_none());
        assert!(parse_redacted(&literal(&"zz".repeat(32))).is_none());
        assert!(parse_redacted(&format!(" {}", literal(&"ab".repeat(32)))).is_none());
        assert!(parse_redacted(&format!("*REDACTED*{}", "ab".repeat(32))).is_none());
        assert!(parse_redacted("hello").is_none());
    }

    #[test]
    fn test_literal_round_trip() {
        let digest = ObjectDigest::new([0x5a; 32]);
        let lit = redacted_literal(&digest);
        assert!(is_redacted_literal(&lit));
        assert_eq!(parse_redacted(&lit), Some(digest));
        assert_eq!(digest.to_redacted_literal(), lit);
    }

    #[test]
    fn test_redact_preserves_digest() {
        let options = HashOptions::default();
        let value = Value::from(vec![1, 2, 3]);
        let redacted = redact(&value, &options).unwrap();
        assert_eq!(
            object_hash(&redacted, &options).unwrap(),
            object_hash(&value, &options).unwrap()
        );
    }
}
