//! QuizSession - state container for one pass through the questionnaire.
//!
//! Holds what the quiz-flow UI needs between screens: where the user is,
//! the option they have highlighted but not yet confirmed, and the answers
//! recorded so far. Scoring receives a copy of the answers, never the session.

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::quiz::{Answer, Question, QuestionBank};

/// Lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    Intro,
    InProgress,
    Complete,
}

impl QuizStatus {
    /// Returns true if transition from self to target is valid.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use QuizStatus::*;
        matches!(
            (self, target),
            (Intro, InProgress) | (Intro, Complete) | (InProgress, Complete)
        )
    }

    /// Performs transition with validation.
    pub fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, QuizStatus::Complete)
    }
}

/// Position within the questionnaire, for progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizProgress {
    /// 1-based number of the question on screen.
    pub current: usize,
    pub total: usize,
    /// `current / total`, 0.0 for an empty bank.
    pub fraction: f64,
}

/// One user's pass through the question bank.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    status: QuizStatus,
    current_index: usize,
    selection: Option<usize>,
    answers: Vec<Answer>,
}

impl<'a> QuizSession<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            status: QuizStatus::Intro,
            current_index: 0,
            selection: None,
            answers: Vec::new(),
        }
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question on screen, while the quiz is in progress.
    pub fn current_question(&self) -> Option<&'a Question> {
        match self.status {
            QuizStatus::InProgress => self.bank.question(self.current_index),
            _ => None,
        }
    }

    /// Option highlighted on the current question but not yet recorded.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Snapshot of the recorded answers, at most one per question.
    pub fn answers(&self) -> Vec<Answer> {
        self.answers.clone()
    }

    pub fn progress(&self) -> QuizProgress {
        let total = self.bank.len();
        let current = if total == 0 { 0 } else { self.current_index + 1 };
        let fraction = if total == 0 {
            0.0
        } else {
            current as f64 / total as f64
        };

        QuizProgress {
            current,
            total,
            fraction,
        }
    }

    /// Leaves the intro screen. An empty bank completes immediately.
    pub fn start(&mut self) -> Result<QuizStatus, DomainError> {
        let target = if self.bank.is_empty() {
            QuizStatus::Complete
        } else {
            QuizStatus::InProgress
        };
        self.status = self.status.transition_to(target)?;
        Ok(self.status)
    }

    /// Highlights an option on the current question.
    ///
    /// # Errors
    /// - `InvalidStateTransition` if the quiz is not in progress
    /// - `InvalidAnswerIndex` if the option does not exist
    pub fn select_option(&mut self, option_index: usize) -> Result<(), DomainError> {
        self.ensure_in_progress()?;
        self.bank
            .resolve(Answer::new(self.current_index, option_index))?;
        self.selection = Some(option_index);
        Ok(())
    }

    /// Records the highlighted option and moves on.
    ///
    /// Any earlier answer for the same question is replaced. After the last
    /// question the session completes.
    ///
    /// # Errors
    /// - `InvalidStateTransition` if the quiz is not in progress
    /// - `NoSelection` if no option is highlighted
    pub fn advance(&mut self) -> Result<QuizStatus, DomainError> {
        self.ensure_in_progress()?;
        let option_index = self.selection.ok_or_else(|| {
            DomainError::new(ErrorCode::NoSelection, "Select an option before continuing")
                .with_detail("question_index", self.current_index.to_string())
        })?;

        let question_index = self.current_index;
        self.answers.retain(|a| a.question_index != question_index);
        self.answers.push(Answer::new(question_index, option_index));
        debug!(question_index, option_index, "Recorded answer");

        if question_index + 1 < self.bank.len() {
            self.current_index += 1;
            self.selection = None;
        } else {
            self.status = self.status.transition_to(QuizStatus::Complete)?;
        }

        Ok(self.status)
    }

    /// Returns to the previous question.
    ///
    /// The highlighted option on the current question is dropped; the
    /// previous question's recorded answer becomes the highlighted option.
    ///
    /// # Errors
    /// - `InvalidStateTransition` if not in progress or already on the first question
    pub fn go_back(&mut self) -> Result<(), DomainError> {
        self.ensure_in_progress()?;
        if self.current_index == 0 {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Already at the first question",
            ));
        }

        self.current_index -= 1;
        self.selection = self
            .answers
            .iter()
            .find(|a| a.question_index == self.current_index)
            .map(|a| a.option_index);
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), DomainError> {
        if self.status != QuizStatus::InProgress {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Quiz is {:?}, not in progress", self.status),
            ));
        }
        Ok(())
    }
}
