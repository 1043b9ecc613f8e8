//! Answer - one (question, option) selection, and the soft error raised
//! when it points outside the question bank.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// A user's selection of one option for one question, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    pub question_index: usize,
    pub option_index: usize,
}

impl Answer {
    pub fn new(question_index: usize, option_index: usize) -> Self {
        Self {
            question_index,
            option_index,
        }
    }
}

impl From<(usize, usize)> for Answer {
    fn from((question_index, option_index): (usize, usize)) -> Self {
        Self::new(question_index, option_index)
    }
}

/// An answer that does not resolve against the question bank.
///
/// Scoring recovers from this by dropping the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidAnswerIndex {
    #[error("question index {question_index} is out of range ({question_count} questions)")]
    QuestionOutOfRange {
        question_index: usize,
        option_index: usize,
        question_count: usize,
    },

    #[error(
        "option index {option_index} is out of range for question {question_index} ({option_count} options)"
    )]
    OptionOutOfRange {
        question_index: usize,
        option_index: usize,
        option_count: usize,
    },
}

impl InvalidAnswerIndex {
    /// The offending answer.
    pub fn answer(&self) -> Answer {
        match *self {
            Self::QuestionOutOfRange {
                question_index,
                option_index,
                ..
            }
            | Self::OptionOutOfRange {
                question_index,
                option_index,
                ..
            } => Answer::new(question_index, option_index),
        }
    }
}

impl From<InvalidAnswerIndex> for DomainError {
    fn from(err: InvalidAnswerIndex) -> Self {
        let answer = err.answer();
        DomainError::new(ErrorCode::InvalidAnswerIndex, err.to_string())
            .with_detail("question_index", answer.question_index.to_string())
            .with_detail("option_index", answer.option_index.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_from_tuple() {
        assert_eq!(Answer::from((2, 3)), Answer::new(2, 3));
    }

    #[test]
    fn invalid_answer_index_reports_offending_answer() {
        let err = InvalidAnswerIndex::OptionOutOfRange {
            question_index: 1,
            option_index: 9,
            option_count: 4,
        };

        assert_eq!(err.answer(), Answer::new(1, 9));
        assert_eq!(
            err.to_string(),
            "option index 9 is out of range for question 1 (4 options)"
        );
    }

    #[test]
    fn invalid_answer_index_converts_to_domain_error() {
        let err: DomainError = InvalidAnswerIndex::QuestionOutOfRange {
            question_index: 10,
            option_index: 0,
            question_count: 10,
        }
        .into();

        assert_eq!(err.code, ErrorCode::InvalidAnswerIndex);
        assert_eq!(err.details.get("question_index"), Some(&"10".to_string()));
    }
}
