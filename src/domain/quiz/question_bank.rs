//! QuestionBank - the fixed, ordered questionnaire.

use once_cell::sync::Lazy;

use super::{fixtures, Answer, AnswerOption, InvalidAnswerIndex, Question};
use crate::domain::catalog::ValueCatalog;
use crate::domain::foundation::{DomainError, ErrorCode};

static STANDARD_BANK: Lazy<QuestionBank> = Lazy::new(|| {
    QuestionBank::new(fixtures::value_questions(), ValueCatalog::standard())
        .expect("built-in question bank must reference only catalog values")
});

/// Ordered list of questions. Question order defines quiz progression and
/// is what answer indices refer to.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank whose every value reference resolves in `catalog`.
    ///
    /// # Errors
    /// - `EmptyField` if a question has a blank prompt or no options
    /// - `UnknownValueReference` if an option or `value_revealed` names a
    ///   value missing from the catalog
    pub fn new(questions: Vec<Question>, catalog: &ValueCatalog) -> Result<Self, DomainError> {
        for (question_index, question) in questions.iter().enumerate() {
            if question.prompt.trim().is_empty() {
                return Err(DomainError::new(ErrorCode::EmptyField, "Question prompt cannot be empty")
                    .with_detail("question_index", question_index.to_string()));
            }
            if question.options.is_empty() {
                return Err(DomainError::new(ErrorCode::EmptyField, "Question has no options")
                    .with_detail("question_index", question_index.to_string()));
            }

            if let Some(revealed) = &question.value_revealed {
                if !catalog.contains(revealed) {
                    return Err(unknown_reference(revealed.as_str(), question_index));
                }
            }

            let unknown = question
                .options
                .iter()
                .flat_map(AnswerOption::weights)
                .find(|w| !catalog.contains(&w.value_id));
            if let Some(w) = unknown {
                return Err(unknown_reference(w.value_id.as_str(), question_index));
            }
        }

        Ok(Self { questions })
    }

    /// The ten built-in questions, shared process-wide.
    pub fn standard() -> &'static QuestionBank {
        &STANDARD_BANK
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Resolves an answer to the option it selects.
    pub fn resolve(&self, answer: Answer) -> Result<&AnswerOption, InvalidAnswerIndex> {
        let question = self.question(answer.question_index).ok_or(
            InvalidAnswerIndex::QuestionOutOfRange {
                question_index: answer.question_index,
                option_index: answer.option_index,
                question_count: self.questions.len(),
            },
        )?;

        question
            .option(answer.option_index)
            .ok_or(InvalidAnswerIndex::OptionOutOfRange {
                question_index: answer.question_index,
                option_index: answer.option_index,
                option_count: question.options.len(),
            })
    }
}

fn unknown_reference(value_id: &str, question_index: usize) -> DomainError {
    DomainError::new(
        ErrorCode::UnknownValueReference,
        format!("Question references unknown value '{}'", value_id),
    )
    .with_detail("value_id", value_id)
    .with_detail("question_index", question_index.to_string())
}
