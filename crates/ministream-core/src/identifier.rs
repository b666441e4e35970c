//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type used for node and edge identities
//! throughout the topology view. Device identifiers repeat on every poll
//! cycle, so interning keeps comparisons and map lookups cheap.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning.
///
/// Identifies nodes and edges in the rendered topology graph. Two `Id`s
/// created from the same string are equal and hash identically.
///
/// # Examples
///
/// ```
/// use ministream_core::identifier::Id;
///
/// let hub_id = Id::new("network_api");
/// let device_id = Id::new("edge-node-01");
///
/// assert_eq!(hub_id, Id::new("network_api"));
/// assert_ne!(hub_id, device_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use ministream_core::identifier::Id;
    ///
    /// let client_id = Id::new("client-cam-3");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice.
    ///
    /// This is a convenience implementation that calls `Id::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ministream_core::identifier::Id;
    ///
    /// let id: Id = "edge-node-01".into();
    /// assert_eq!(id, "edge-node-01");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("network_api");
        let id2 = Id::new("network_api");
        let id3 = Id::new("edge-node-01");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "network_api");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("client-cam-3");
        assert_eq!(format!("{}", id), "client-cam-3");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "edge-node-01".into();
        let id2 = Id::new("edge-node-01");

        assert_eq!(id1, id2);
        assert_eq!(id1, "edge-node-01");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_copy_trait() {
        let id1 = Id::new("copy_test");
        let id2 = id1;
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert_eq!(id2, "copy_test");
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("edge-node-01");

        assert!(id == "edge-node-01");
        assert!(id != "edge-node-02");

        let empty = Id::new("");
        assert!(empty == "");
        assert!(empty != "non-empty");
    }

    #[test]
    fn test_partial_eq_str_ref() {
        let id = Id::new("client-cam-3");

        let name1 = String::from("client-cam-3");
        let name2 = String::from("client-cam-4");

        assert!(id == name1.as_str());
        assert!(id != name2.as_str());
    }
}
