//! Question Bank - the fixed questionnaire and the answers recorded against it.

mod answer;
mod fixtures;
mod question;
mod question_bank;

pub use answer::{Answer, InvalidAnswerIndex};
pub use question::{AnswerOption, Question, ValueWeight};
pub use question_bank::QuestionBank;
