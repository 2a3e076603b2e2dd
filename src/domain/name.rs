//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifying name of a contact.
///
/// Names compare and hash on the exact underlying string, so `"alice"` and
/// `"Alice"` are different contacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_name_equality() {
        assert_eq!(Name::new("Alice"), Name::from("Alice"));
        assert_ne!(Name::new("Alice"), Name::new("alice"));
    }

    #[test]
    fn test_name_hash_matches_equality() {
        let mut names = HashSet::new();
        names.insert(Name::new("Bob"));
        assert!(names.contains(&Name::from(String::from("Bob"))));
        assert!(!names.insert(Name::new("Bob")));
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Alice");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Alice\"");
        let back: Name = serde_json::from_str("\"Alice\"").unwrap();
        assert_eq!(back, name);
    }
}
