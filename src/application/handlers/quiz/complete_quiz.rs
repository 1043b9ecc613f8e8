//! CompleteQuizHandler - Command handler turning finished answers into a profile.

use serde::Serialize;
use tracing::info;

use crate::domain::foundation::Timestamp;
use crate::domain::profile::{ProfileAssembler, ShareableProfile};
use crate::domain::quiz::{Answer, InvalidAnswerIndex};
use crate::domain::scoring::{RankedValue, ScoringEngine};

/// Command to score a finished quiz.
#[derive(Debug, Clone, Default)]
pub struct CompleteQuizCommand {
    pub answers: Vec<Answer>,
}

impl CompleteQuizCommand {
    pub fn new(answers: impl Into<Vec<Answer>>) -> Self {
        Self {
            answers: answers.into(),
        }
    }
}

/// Result of a completed quiz.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteQuizResult {
    /// Every catalog value, best first.
    pub ranked: Vec<RankedValue>,
    pub profile: ShareableProfile,
    /// Answers dropped because they point outside the question bank.
    pub discarded: Vec<InvalidAnswerIndex>,
}

/// Handler for completing quizzes.
#[derive(Debug, Clone)]
pub struct CompleteQuizHandler<'a> {
    engine: ScoringEngine<'a>,
    assembler: ProfileAssembler,
}

impl<'a> CompleteQuizHandler<'a> {
    pub fn new(engine: ScoringEngine<'a>, assembler: ProfileAssembler) -> Self {
        Self { engine, assembler }
    }

    pub fn engine(&self) -> ScoringEngine<'a> {
        self.engine
    }

    pub fn assembler(&self) -> &ProfileAssembler {
        &self.assembler
    }

    /// Scores the answers and stamps the profile with the current time.
    pub fn handle(&self, cmd: CompleteQuizCommand) -> CompleteQuizResult {
        self.handle_at(cmd, Timestamp::now())
    }

    /// Same as [`handle`](Self::handle) with a caller-supplied clock.
    pub fn handle_at(&self, cmd: CompleteQuizCommand, now: Timestamp) -> CompleteQuizResult {
        // 1. Score and rank
        let outcome = self.engine.compute_scores(&cmd.answers);

        // 2. Assemble the shareable profile
        let profile = self.assembler.build_profile(&outcome.ranked, now);

        info!(
            answers = cmd.answers.len(),
            discarded = outcome.discarded.len(),
            top_value = profile.top_values.first().map(|v| v.id().as_str()),
            "Quiz completed"
        );

        CompleteQuizResult {
            ranked: outcome.ranked,
            profile,
            discarded: outcome.discarded,
        }
    }
}
