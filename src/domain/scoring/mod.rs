//! Scoring Module - pure aggregation of answers into ranked values.
//!
//! All functions are pure: no clock, no I/O, no state kept between calls.
//! Identical answer sets always produce identical rankings.

mod ranked_value;
mod scoring_engine;

pub use crate::domain::quiz::InvalidAnswerIndex;
pub use ranked_value::{RankedValue, ScoringOutcome, ValueScore};
pub use scoring_engine::ScoringEngine;
