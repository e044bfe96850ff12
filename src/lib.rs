//! # object-hash
//!
//! Deterministic SHA-256 digests for nested data.
//!
//! The crate answers one question:
//!
//! > Are these two structured values the **same value**?
//!
//! ## Core Contract
//!
//! 1. Reduce any nil, boolean, string, number, sequence or mapping to a 32-byte digest
//! 2. Structurally equal values produce identical digests on every platform
//! 3. Any subtree can be replaced by a `**REDACTED**<hex>` literal of its digest
//!    without changing the digest of the whole
//!
//! ## Architecture
//!
//! ```text
//! Value → Canonicalizer ─┬─ scalar → tag + payload → SHA-256
//!                        └─ container → child digests → (sort) → SHA-256
//!                                ↑
//!                        NumericNormalizer (numbers)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same value + same options → identical digest
//! - Mapping key order never matters
//! - Sequence order matters unless `ignore_array_item_order` is set
//! - Integers and floats with the same value hash identically

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod normalize;
pub mod redaction;
pub mod canonical;
pub mod json;

// Re-exports
pub use types::{HashOptions, ObjectDigest, TypeTag, Value, DIGEST_LEN};
pub use normalize::{normalize_float, MAX_ENCODED_LEN};
pub use redaction::{
    is_redacted_literal, parse_redacted, redact, redacted_literal, REDACTED_PREFIX,
};
pub use canonical::{
    canonicalize, compare_digests, hash_tagged, object_hash, HashError, ObjectHasher,
};
pub use json::{object_hash_json, object_hash_serialize, object_hash_str};

/// Version of the canonicalization scheme.
///
/// Any change to tags, payload layout or number encoding changes digests and
/// must bump this version.
pub const OBJECT_HASH_SCHEME_VERSION: &str = "1.0.0";
