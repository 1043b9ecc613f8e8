//! Quiz handlers - session flow, completion and pair comparison.

mod compare_values;
mod complete_quiz;
mod quiz_session;

pub use compare_values::{
    CompareValuesHandler, CompareValuesQuery, CompareValuesResult, SharedValueInsight,
};
pub use complete_quiz::{CompleteQuizCommand, CompleteQuizHandler, CompleteQuizResult};
pub use quiz_session::{QuizProgress, QuizSession, QuizStatus};
