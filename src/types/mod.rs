//! Core types for object hashing.

pub mod tag;
pub mod digest;
pub mod options;
pub mod value;

pub use tag::TypeTag;
pub use digest::{ObjectDigest, DIGEST_LEN};
pub use options::HashOptions;
pub use value::Value;
