//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Profile size must be between 3 and 5, got {0}")]
    InvalidProfileSize(usize),

    #[error("Insights file not found: {0}")]
    InsightsFileNotFound(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
