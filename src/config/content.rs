//! Insight content configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where authored insight content comes from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContentConfig {
    /// YAML file replacing the built-in insight tables
    #[serde(default)]
    pub insights_path: Option<PathBuf>,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.insights_path {
            Some(path) if !path.is_file() => Err(ValidationError::InsightsFileNotFound(
                path.display().to_string(),
            )),
            _ => Ok(()),
        }
    }
}
