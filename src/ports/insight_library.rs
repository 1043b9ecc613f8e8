//! Insight Library Port - authored common-ground content.
//!
//! Bridging statements, value statistics and discussion prompts are written
//! by editorial staff. The insight generator reads them through this port so
//! the content can be swapped or extended without touching scoring logic.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValueId};
use crate::domain::insight::BridgingKey;

/// Port for looking up authored insight content.
///
/// # Contract
///
/// Implementations must:
/// - Treat bridging keys as order-independent value sets
/// - Return `None` when nothing is authored (never an error)
/// - Be immutable after construction so lookups are safe from any thread
pub trait InsightLibrary: Send + Sync {
    /// Bridging statement authored for a value combination.
    fn bridging_message(&self, key: &BridgingKey) -> Option<String>;

    /// Statistic or context line for a single value.
    fn value_context(&self, value_id: &ValueId) -> Option<String>;

    /// Pair-mode discussion prompt templates containing `[SHARED_VALUE]`.
    fn discussion_prompts(&self) -> Vec<String>;
}

/// Errors raised while loading insight content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read insight content: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse insight content: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid bridging key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Insight content references unknown value '{0}'")]
    UnknownValue(String),
}

impl From<ContentError> for DomainError {
    fn from(err: ContentError) -> Self {
        DomainError::new(ErrorCode::ContentLoadFailed, err.to_string())
    }
}
