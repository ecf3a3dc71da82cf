//! Record-type names and limiter source identities.

use serde::{Deserialize, Serialize};

/// Name of a record type as declared in the registry configuration.
///
/// Record types are data, not code: every new record kind is added to the
/// registry with a ledger kind and an ownership chain, and the engines stay
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(String);

impl RecordType {
    /// Creates a record type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the type name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque key identifying the source of a login attempt.
///
/// The request layer chooses the keying (typically the client IP); the
/// limiter only compares and stores it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceIdentity(String);

impl SourceIdentity {
    /// Creates a source identity from the request layer's key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the identity key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceIdentity {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl std::fmt::Display for SourceIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_equality() {
        assert_eq!(RecordType::from("leave_taken"), RecordType::new("leave_taken"));
        assert_ne!(RecordType::from("leave_taken"), RecordType::from("leave_grant"));
    }

    #[test]
    fn test_source_identity_display() {
        let identity = SourceIdentity::from("203.0.113.7");
        assert_eq!(identity.to_string(), "203.0.113.7");
        assert_eq!(identity.as_str(), "203.0.113.7");
    }
}
