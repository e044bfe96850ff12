//! Hashing options.
//!
//! Two digests are only comparable when both were produced with the same
//! options. Nothing enforces this; it is a contract on the caller.

use serde::{Deserialize, Serialize};

/// Environment variable toggling [`HashOptions::ignore_array_item_order`].
pub const ENV_IGNORE_ARRAY_ITEM_ORDER: &str = "OBJECT_HASH_IGNORE_ARRAY_ITEM_ORDER";

/// Environment variable setting [`HashOptions::max_depth`].
pub const ENV_MAX_DEPTH: &str = "OBJECT_HASH_MAX_DEPTH";

/// Options controlling how values are canonicalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashOptions {
    /// Sort list item digests before combining them, so `[a, b]` and `[b, a]`
    /// hash identically. Applies to every list in the value, at any depth.
    pub ignore_array_item_order: bool,
    /// Maximum container nesting depth. `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl HashOptions {
    /// Default options: positional lists, unbounded depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options with list item order ignored.
    pub fn unordered() -> Self {
        Self::default().with_ignore_array_item_order(true)
    }

    /// Set whether list item order is ignored.
    pub fn with_ignore_array_item_order(mut self, ignore: bool) -> Self {
        self.ignore_array_item_order = ignore;
        self
    }

    /// Bound container nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Load options from the environment.
    ///
    /// - `OBJECT_HASH_IGNORE_ARRAY_ITEM_ORDER`: `true`/`1` to ignore list order (default: false)
    /// - `OBJECT_HASH_MAX_DEPTH`: maximum nesting depth (default: unbounded)
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            ignore_array_item_order: std::env::var(ENV_IGNORE_ARRAY_ITEM_ORDER)
                .ok()
                .and_then(|s| parse_flag(&s))
                .unwrap_or(false),
            max_depth: std::env::var(ENV_MAX_DEPTH)
                .ok()
                .and_then(|s| s.trim().parse().ok()),
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
