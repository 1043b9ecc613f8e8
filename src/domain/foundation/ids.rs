//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::ValidationError;

/// Stable identifier of a core value (e.g. `"fairness"`).
///
/// Ids are authored content, not generated, so this wraps a string rather
/// than a UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueId(String);

impl ValueId {
    /// Creates a ValueId without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a ValueId, rejecting blank input.
    pub fn try_new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("value_id"));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ValueId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for ValueId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn value_id_try_new_rejects_blank() {
        assert!(ValueId::try_new("").is_err());
        assert!(ValueId::try_new("   ").is_err());
        assert_eq!(ValueId::try_new("truth").unwrap().as_str(), "truth");
    }

    #[test]
    fn value_id_serializes_as_plain_string() {
        let id = ValueId::from("community");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"community\"");
    }

    #[test]
    fn value_id_map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ValueId::from("voice"), 1);
        assert_eq!(map.get("voice"), Some(&1));
    }
}
