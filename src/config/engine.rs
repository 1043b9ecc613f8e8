//! Values engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::profile::ProfileSize;

/// Scoring and profile settings
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Number of top values kept in a shareable profile (3-5)
    #[serde(default = "default_profile_size")]
    pub profile_size: usize,
}

impl EngineConfig {
    /// Profile size as a validated value object
    pub fn profile_size(&self) -> Result<ProfileSize, ValidationError> {
        ProfileSize::try_new(self.profile_size)
            .map_err(|_| ValidationError::InvalidProfileSize(self.profile_size))
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.profile_size().map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile_size: default_profile_size(),
        }
    }
}

fn default_profile_size() -> usize {
    ProfileSize::MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_size_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.profile_size, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_profile_size_out_of_range_fails() {
        let config = EngineConfig { profile_size: 8 };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidProfileSize(8))
        ));
    }
}
