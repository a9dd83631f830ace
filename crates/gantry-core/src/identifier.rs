//! Node identifier management using string interning.
//!
//! This module provides the [`NodeId`] type, the stable handle returned by
//! node declaration and accepted as an edge endpoint. Identifiers are interned
//! so that handles stay `Copy` and comparisons are cheap.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner backing all node identifiers.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Interned node key, used as the stable reference to a declared node.
///
/// A `NodeId` is `Copy`, so declarations can hand out handles that are freely
/// reused as edge endpoints. Two ids created from the same key string are
/// equal, regardless of which diagram declared them; membership in a
/// particular diagram is checked at connect time.
///
/// # Examples
///
/// ```
/// use gantry_core::identifier::NodeId;
///
/// let users = NodeId::new("users");
/// let waf = NodeId::new("waf");
///
/// assert_ne!(users, waf);
/// assert_eq!(users, NodeId::new("users"));
/// assert_eq!(users.to_string(), "users");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(DefaultSymbol);

impl NodeId {
    /// Creates a `NodeId` from a key string, interning it on first use.
    pub fn new(key: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(key);
        Self(symbol)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let key = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{key}")
    }
}

impl From<&str> for NodeId {
    /// Creates a `NodeId` from a string slice.
    ///
    /// This is a convenience implementation that calls `NodeId::new`.
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl PartialEq<str> for NodeId {
    /// Allows direct comparison with string slices: `id == "users"`.
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let key = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        key == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_interns_equal_keys() {
        let id1 = NodeId::new("supervisor");
        let id2 = NodeId::new("supervisor");
        let id3 = NodeId::new("bedrock");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "supervisor");
    }

    #[test]
    fn test_display_round_trip() {
        let id = NodeId::new("step_functions");
        assert_eq!(format!("{id}"), "step_functions");
    }

    #[test]
    fn test_from_str_slice() {
        let id1: NodeId = "cloudwatch".into();
        let id2 = NodeId::new("cloudwatch");

        assert_eq!(id1, id2);
        assert_eq!(id1, "cloudwatch");
    }

    #[test]
    fn test_copy_semantics() {
        let id1 = NodeId::new("dynamodb");
        let id2 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id1, "dynamodb");
        assert_eq!(id2, "dynamodb");
    }

    #[test]
    fn test_hash_and_eq_in_map() {
        use std::collections::HashMap;

        let id1 = NodeId::new("s3");
        let id2 = NodeId::new("s3");
        let id3 = NodeId::new("quicksight");

        let mut map = HashMap::new();
        map.insert(id1, "storage");
        map.insert(id3, "analytics");

        assert_eq!(map.get(&id2), Some(&"storage"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = NodeId::new("api_gateway");

        assert!(id == "api_gateway");
        assert!(id != "api");

        let owned = String::from("api_gateway");
        assert!(id == owned.as_str());
    }
}
