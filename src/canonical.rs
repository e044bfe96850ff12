//! Canonicalization and hashing of nested values.
//!
//! ## Hashing Rules
//!
//! Every value is reduced to `SHA256(tag || payload)`:
//!
//! | Value | Tag | Payload |
//! |-------|-----|---------|
//! | nil | `n` | empty |
//! | boolean | `b` | `"1"` or `"0"` |
//! | string | `u` | UTF-8 bytes |
//! | number | `f` | [`normalize_float`] text |
//! | sequence | `l` | child digests, in order (or sorted) |
//! | mapping | `d` | sorted `digest(key) \|\| digest(value)` pairs |
//!
//! A redacted literal (see [`crate::redaction`]) is not hashed at all: its
//! embedded digest is returned as-is.
//!
//! ## Determinism Guarantees
//!
//! - Mapping key order never affects the digest
//! - Sequence order affects the digest unless `ignore_array_item_order` is set
//! - Numbers are encoded from exact binary arithmetic, never from a
//!   platform-specific float rendering

use std::cmp::Ordering;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::normalize::normalize_float;
use crate::redaction::parse_redacted;
use crate::types::{HashOptions, ObjectDigest, TypeTag, Value, DIGEST_LEN};

/// Errors raised while hashing a value.
///
/// None of these are recovered internally: a failure anywhere in the tree
/// fails the whole hash.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// A number could not be encoded.
    #[error("invalid number {value}: {reason}")]
    NumericEncoding {
        /// The offending number.
        value: f64,
        /// Why encoding failed.
        reason: String,
    },
    /// A value kind with no hashing rule.
    #[error("unknown type: {kind}")]
    UnknownType {
        /// Description of the offending kind.
        kind: String,
    },
    /// Containers nested deeper than `HashOptions::max_depth`.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// Input could not be converted through the JSON data model.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HashError {
    pub(crate) fn numeric(value: f64, reason: impl Into<String>) -> Self {
        Self::NumericEncoding {
            value,
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_type(kind: impl Into<String>) -> Self {
        Self::UnknownType { kind: kind.into() }
    }
}

/// Hash `tag || payload` with SHA-256.
pub fn hash_tagged(tag: TypeTag, payload: &[u8]) -> ObjectDigest {
    let mut hasher = Sha256::new();
    hasher.update(tag.as_bytes());
    hasher.update(payload);
    ObjectDigest::new(hasher.finalize().into())
}

/// Total order over digest bytes.
///
/// Byte-wise lexicographic, which matches comparing lowercase hex renderings.
/// Used wherever child digests must be combined independent of their order.
pub fn compare_digests(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Compute the digest of a value.
///
/// This is the raw recursive algorithm; [`object_hash`] wraps it with logging.
pub fn canonicalize(value: &Value, options: &HashOptions) -> Result<ObjectDigest, HashError> {
    canonicalize_at(value, options, 0)
}

fn canonicalize_at(
    value: &Value,
    options: &HashOptions,
    depth: usize,
) -> Result<ObjectDigest, HashError> {
    match value {
        Value::Redacted(digest) => Ok(*digest),
        Value::Nil => Ok(hash_tagged(TypeTag::Nil, &[])),
        Value::Bool(b) => Ok(hash_tagged(TypeTag::Boolean, if *b { b"1" } else { b"0" })),
        Value::String(s) => Ok(hash_str(s)),
        Value::Number(n) => {
            let encoded = normalize_float(*n)?;
            Ok(hash_tagged(TypeTag::Float, encoded.as_bytes()))
        }
        Value::Sequence(items) => {
            check_depth(options, depth)?;
            let mut hashes = items
                .iter()
                .map(|item| canonicalize_at(item, options, depth + 1))
                .collect::<Result<Vec<_>, _>>()?;
            if options.ignore_array_item_order {
                hashes.sort_by(|a, b| compare_digests(a.as_bytes(), b.as_bytes()));
            }

            let mut payload = Vec::with_capacity(hashes.len() * DIGEST_LEN);
            for hash in &hashes {
                payload.extend_from_slice(hash.as_bytes());
            }
            tracing::trace!(len = items.len(), depth, "hashed sequence");
            Ok(hash_tagged(TypeTag::List, &payload))
        }
        Value::Mapping(map) => {
            check_depth(options, depth)?;
            let mut pairs = Vec::with_capacity(map.len());
            for (key, child) in map {
                let mut pair = [0u8; 2 * DIGEST_LEN];
                pair[..DIGEST_LEN].copy_from_slice(hash_str(key).as_bytes());
                pair[DIGEST_LEN..]
                    .copy_from_slice(canonicalize_at(child, options, depth + 1)?.as_bytes());
                pairs.push(pair);
            }
            // Always sorted: key order carries no meaning.
            pairs.sort_by(|a, b| compare_digests(a, b));

            let payload = pairs.concat();
            tracing::trace!(len = map.len(), depth, "hashed mapping");
            Ok(hash_tagged(TypeTag::Dict, &payload))
        }
    }
}

fn hash_str(s: &str) -> ObjectDigest {
    match parse_redacted(s) {
        Some(digest) => digest,
        None => hash_tagged(TypeTag::Unicode, s.as_bytes()),
    }
}

fn check_depth(options: &HashOptions, depth: usize) -> Result<(), HashError> {
    match options.max_depth {
        Some(limit) if depth >= limit => Err(HashError::DepthLimitExceeded { limit }),
        _ => Ok(()),
    }
}

/// Hash a value.
///
/// # Example
///
/// ```rust
/// use object_hash::{object_hash, HashOptions, Value};
///
/// let a = Value::mapping().with_entry("x", 1).with_entry("y", "two");
/// let b = Value::mapping().with_entry("y", "two").with_entry("x", 1.0);
///
/// let options = HashOptions::default();
/// assert_eq!(object_hash(&a, &options).unwrap(), object_hash(&b, &options).unwrap());
/// ```
pub fn object_hash(value: &Value, options: &HashOptions) -> Result<ObjectDigest, HashError> {
    match canonicalize(value, options) {
        Ok(digest) => {
            tracing::debug!(
                kind = value.kind(),
                digest = %digest,
                ignore_array_item_order = options.ignore_array_item_order,
                "object hashed"
            );
            Ok(digest)
        }
        Err(e) => {
            tracing::warn!(kind = value.kind(), error = %e, "object hash failed");
            Err(e)
        }
    }
}

/// Reusable hasher bound to a fixed set of options.
///
/// Digests are only comparable when produced with the same options; holding
/// them in one place keeps a caller from mixing settings by accident.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectHasher {
    options: HashOptions,
}

impl ObjectHasher {
    /// Create a hasher with the given options.
    pub fn new(options: HashOptions) -> Self {
        Self { options }
    }

    /// Create a hasher configured from the environment.
    pub fn from_env() -> Self {
        Self::new(HashOptions::from_env())
    }

    /// Options in effect.
    pub fn options(&self) -> &HashOptions {
        &self.options
    }

    /// Hash a value.
    pub fn hash(&self, value: &Value) -> Result<ObjectDigest, HashError> {
        object_hash(value, &self.options)
    }

    /// Hash a value and render the digest as lowercase hex.
    pub fn hash_hex(&self, value: &Value) -> Result<String, HashError> {
        self.hash(value).map(|d| d.to_hex())
    }

    /// Hash a JSON document.
    pub fn hash_json(&self, json: &serde_json::Value) -> Result<ObjectDigest, HashError> {
        crate::json::object_hash_json(json, &self.options)
    }

    /// Hash any serializable type through its JSON representation.
    pub fn hash_serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<ObjectDigest, HashError> {
        crate::json::object_hash_serialize(value, &self.options)
    }

    /// Replace a value with its redacted literal.
    pub fn redact(&self, value: &Value) -> Result<Value, HashError> {
        crate::redaction::redact(value, &self.options)
    }
}
