//! ProfileSize value object - how many ranked values a profile keeps.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Number of top values kept in a shareable profile (3 to 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ProfileSize(usize);

impl ProfileSize {
    pub const MIN: usize = 3;
    pub const MAX: usize = 5;

    /// Creates a ProfileSize, returning error if outside 3..=5.
    pub fn try_new(value: usize) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "profile_size",
                Self::MIN as i64,
                Self::MAX as i64,
                value as i64,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl Default for ProfileSize {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<usize> for ProfileSize {
    type Error = ValidationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ProfileSize> for usize {
    fn from(size: ProfileSize) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_size_accepts_three_to_five() {
        for n in 3..=5 {
            assert_eq!(ProfileSize::try_new(n).unwrap().value(), n);
        }
    }

    #[test]
    fn profile_size_rejects_out_of_range() {
        assert!(ProfileSize::try_new(2).is_err());
        assert!(ProfileSize::try_new(6).is_err());
    }

    #[test]
    fn profile_size_defaults_to_five() {
        assert_eq!(ProfileSize::default().value(), 5);
    }
}
