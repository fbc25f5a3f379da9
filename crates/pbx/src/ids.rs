//! Object identifiers for descriptor entries.
//!
//! Xcode-style descriptors key every entry by a 24-digit hex identifier.
//! `PbxProject` allocates them from a monotonic counter, so identifiers are
//! deterministic within one project instance.

use std::fmt;
use std::sync::Arc;

/// An identifier for one entry in the build descriptor (file reference,
/// build file, target).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectId(Arc<str>);

impl ObjectId {
    /// Creates a new ObjectId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Formats a counter value as a 24-digit uppercase-hex identifier.
    pub fn from_serial(serial: u64) -> Self {
        Self(format!("{serial:024X}").into())
    }

    /// Returns the string representation of this object ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_from_serial_is_24_hex_digits() {
        let id = ObjectId::from_serial(0);
        assert_eq!(id.as_str().len(), 24);
        assert_eq!(id.as_str(), "000000000000000000000000");

        let id = ObjectId::from_serial(0xAB);
        assert_eq!(id.as_str(), "0000000000000000000000AB");
    }

    #[test]
    fn test_object_id_serials_are_distinct() {
        assert_ne!(ObjectId::from_serial(1), ObjectId::from_serial(2));
    }

    #[test]
    fn test_object_id_display() {
        let id = ObjectId::new("13B07F861A680F5B00A75B9A");
        assert_eq!(id.to_string(), "13B07F861A680F5B00A75B9A");
    }
}
