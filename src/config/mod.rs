//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMMON_GROUND_` prefix and nested values use double underscores as separators.
//!
//! Every setting has a default, so an empty environment yields a working
//! engine over the built-in content.
//!
//! # Example
//!
//! ```no_run
//! use common_ground::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to initialize tracing");
//! ```

mod content;
mod engine;
mod error;
mod logging;

pub use content::ContentConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Scoring and profile settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Insight content source
    #[serde(default)]
    pub content: ContentConfig,

    /// Structured logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMMON_GROUND` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COMMON_GROUND__ENGINE__PROFILE_SIZE=3` -> `engine.profile_size = 3`
    /// - `COMMON_GROUND__CONTENT__INSIGHTS_PATH=...` -> `content.insights_path = ...`
    /// - `COMMON_GROUND__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMMON_GROUND")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.content.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
