//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quiz;

pub use quiz::{
    // Session flow
    QuizProgress,
    QuizSession,
    QuizStatus,
    // Commands and Results
    CompleteQuizCommand,
    CompleteQuizHandler,
    CompleteQuizResult,
    // Queries
    CompareValuesHandler,
    CompareValuesQuery,
    CompareValuesResult,
    SharedValueInsight,
};
