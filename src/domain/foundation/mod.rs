//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the values engine.

mod errors;
mod ids;
mod timestamp;
mod weight;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::ValueId;
pub use timestamp::Timestamp;
pub use weight::Weight;
