//! Question and AnswerOption - the immutable shape of the questionnaire.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ValidationError, ValueId, Weight};

/// A single value reinforced by an option, with its contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueWeight {
    pub value_id: ValueId,
    pub weight: Weight,
}

/// One selectable answer to a question.
///
/// Maps value ids to positive weights. Each value appears at most once;
/// values not listed contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnswerOptionData")]
pub struct AnswerOption {
    pub text: String,
    weights: Vec<ValueWeight>,
}

/// Wire shape of an option, checked before it becomes an `AnswerOption`.
#[derive(Deserialize)]
struct AnswerOptionData {
    text: String,
    #[serde(default)]
    weights: Vec<ValueWeight>,
}

impl TryFrom<AnswerOptionData> for AnswerOption {
    type Error = ValidationError;

    fn try_from(data: AnswerOptionData) -> Result<Self, Self::Error> {
        let mut option = Self::new(data.text);
        for entry in data.weights {
            if option.weight_for(&entry.value_id).is_some() {
                return Err(ValidationError::invalid_format(
                    "weights",
                    format!("value '{}' is listed more than once", entry.value_id),
                ));
            }
            option = option.with_weight(entry.value_id, entry.weight);
        }
        Ok(option)
    }
}

impl AnswerOption {
    /// Creates an option that reinforces no value yet.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weights: Vec::new(),
        }
    }

    /// Creates an option reinforcing every listed value with the same weight.
    pub fn reinforcing(text: impl Into<String>, value_ids: &[&str], weight: Weight) -> Self {
        value_ids
            .iter()
            .fold(Self::new(text), |option, id| option.with_weight(*id, weight))
    }

    /// Sets the weight for a value, replacing any earlier weight for it.
    pub fn with_weight(mut self, value_id: impl Into<ValueId>, weight: Weight) -> Self {
        let value_id = value_id.into();
        match self.weights.iter_mut().find(|w| w.value_id == value_id) {
            Some(existing) => existing.weight = weight,
            None => self.weights.push(ValueWeight { value_id, weight }),
        }
        self
    }

    /// Weights in declaration order.
    pub fn weights(&self) -> &[ValueWeight] {
        &self.weights
    }

    /// Weight contributed to `value_id`, if any.
    pub fn weight_for(&self, value_id: &ValueId) -> Option<Weight> {
        self.weights
            .iter()
            .find(|w| &w.value_id == value_id)
            .map(|w| w.weight)
    }
}

/// A question designed to surface values without policy framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    /// The value this question primarily explores.
    pub value_revealed: Option<ValueId>,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            prompt: prompt.into(),
            value_revealed: None,
            options,
        }
    }

    /// Marks the value this question explores.
    pub fn revealing(mut self, value_id: impl Into<ValueId>) -> Self {
        self.value_revealed = Some(value_id.into());
        self
    }

    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }
}
