//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod values_engine;

pub use handlers::{
    CompareValuesHandler, CompareValuesQuery, CompareValuesResult, CompleteQuizCommand,
    CompleteQuizHandler, CompleteQuizResult, QuizProgress, QuizSession, QuizStatus,
    SharedValueInsight,
};
pub use values_engine::ValuesEngine;
