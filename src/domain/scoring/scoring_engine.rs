//! Scoring Engine - aggregates answers into a ranked list of values.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::{RankedValue, ScoringOutcome, ValueScore};
use crate::domain::catalog::ValueCatalog;
use crate::domain::quiz::{Answer, QuestionBank};

/// Turns an answer set into ranked values.
///
/// Borrowing the catalog and bank keeps the engine a pure function of the
/// answers it is handed; it holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a ValueCatalog,
    bank: &'a QuestionBank,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a ValueCatalog, bank: &'a QuestionBank) -> Self {
        Self { catalog, bank }
    }

    pub fn catalog(&self) -> &'a ValueCatalog {
        self.catalog
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    /// Keeps only the last answer recorded for each question index.
    ///
    /// The result is ordered by question index.
    pub fn dedup_answers(answers: &[Answer]) -> Vec<Answer> {
        let mut latest = BTreeMap::new();
        for answer in answers {
            latest.insert(answer.question_index, *answer);
        }
        latest.into_values().collect()
    }

    /// Ranked values for an answer set. See [`ScoringEngine::compute_scores`].
    pub fn compute_top_values(&self, answers: &[Answer]) -> Vec<RankedValue> {
        self.compute_scores(answers).ranked
    }

    /// Scores and ranks every catalog value.
    ///
    /// # Algorithm
    /// 1. Dedup by question index, last answer wins
    /// 2. Resolve each answer; out-of-range answers are dropped and reported
    /// 3. Seed every value at 0 and add the chosen options' weights
    /// 4. Stable sort by descending score, so ties keep catalog order
    /// 5. Rank = 1-based position
    ///
    /// # Edge Cases
    /// - No answers, or none valid: every value at 0, in catalog order
    /// - Weights naming a value outside the catalog: ignored
    pub fn compute_scores(&self, answers: &[Answer]) -> ScoringOutcome {
        let mut totals = vec![0.0_f64; self.catalog.len()];
        let mut discarded = Vec::new();

        for answer in Self::dedup_answers(answers) {
            let option = match self.bank.resolve(answer) {
                Ok(option) => option,
                Err(err) => {
                    warn!(
                        question_index = answer.question_index,
                        option_index = answer.option_index,
                        "Discarding answer: {}",
                        err
                    );
                    discarded.push(err);
                    continue;
                }
            };

            for weight in option.weights() {
                match self.catalog.position(&weight.value_id) {
                    Some(position) => totals[position] += weight.weight.value(),
                    None => debug!(value_id = %weight.value_id, "Weight for value outside catalog"),
                }
            }
        }

        let values = self.catalog.all_values();

        let scores = values
            .iter()
            .zip(&totals)
            .map(|(value, &score)| ValueScore {
                value_id: value.id.clone(),
                score,
            })
            .collect();

        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| totals[b].total_cmp(&totals[a]));

        let ranked = order
            .into_iter()
            .enumerate()
            .map(|(i, position)| RankedValue {
                value: values[position].clone(),
                rank: i + 1,
                score: totals[position],
            })
            .collect();

        ScoringOutcome {
            scores,
            ranked,
            discarded,
        }
    }
}

impl ScoringEngine<'static> {
    /// Engine over the built-in catalog and question bank.
    pub fn standard() -> Self {
        Self::new(ValueCatalog::standard(), QuestionBank::standard())
    }
}
