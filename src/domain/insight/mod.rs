//! Insight Module - common-ground text generated from ranked values.
//!
//! # Components
//!
//! - `InsightGenerator` - Summary sentence, bridging statement, value context
//!   and discussion prompts
//! - `BridgingKey` - Order-independent value combination a statement is authored for
//! - `find_shared_values` - Pair mode overlap between two users' top values
//!
//! Authored content comes through the `InsightLibrary` port; this module
//! only decides which piece of content applies.

mod bridging_key;
mod comparison;
mod insight_generator;

pub use bridging_key::BridgingKey;
pub use comparison::find_shared_values;
pub use insight_generator::{
    InsightGenerator, DEFAULT_CONTEXT, EMPTY_SUMMARY, SHARED_VALUE_PLACEHOLDER,
};
