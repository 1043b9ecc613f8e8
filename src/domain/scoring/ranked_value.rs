//! Derived scoring results.

use serde::{Deserialize, Serialize};

use super::InvalidAnswerIndex;
use crate::domain::catalog::CoreValue;
use crate::domain::foundation::ValueId;

/// Accumulated score for one value. Computed fresh on every scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueScore {
    pub value_id: ValueId,
    pub score: f64,
}

/// A value joined with its 1-based rank and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedValue {
    #[serde(flatten)]
    pub value: CoreValue,
    pub rank: usize,
    pub score: f64,
}

impl RankedValue {
    pub fn id(&self) -> &ValueId {
        &self.value.id
    }

    pub fn name(&self) -> &str {
        &self.value.name
    }
}

/// Everything one scoring pass produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    /// One score per catalog value, in catalog order.
    pub scores: Vec<ValueScore>,
    /// Every catalog value, best first.
    pub ranked: Vec<RankedValue>,
    /// Answers dropped because they did not resolve against the bank.
    pub discarded: Vec<InvalidAnswerIndex>,
}

impl ScoringOutcome {
    /// Score for a value, if it is in the catalog.
    pub fn score_of(&self, value_id: &ValueId) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| &s.value_id == value_id)
            .map(|s| s.score)
    }

    /// The best `n` ranked values (fewer if the catalog is smaller).
    pub fn top(&self, n: usize) -> &[RankedValue] {
        &self.ranked[..n.min(self.ranked.len())]
    }
}
