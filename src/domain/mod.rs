//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - The fixed set of core values and their display data
//! - `quiz` - Questions, answer options and recorded answers
//! - `scoring` - Pure aggregation of answers into ranked values
//! - `insight` - Summary, bridging and context text; pair-mode comparison
//! - `profile` - Shareable profile assembly and share payloads

pub mod catalog;
pub mod foundation;
pub mod insight;
pub mod profile;
pub mod quiz;
pub mod scoring;
