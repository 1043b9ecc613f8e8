//! Insight Generator - turns ranked values into shareable text.

use std::fmt;
use std::sync::Arc;

use super::BridgingKey;
use crate::domain::catalog::CoreValue;
use crate::domain::scoring::RankedValue;
use crate::ports::InsightLibrary;

/// Shown in place of a summary when there is nothing to summarize.
pub const EMPTY_SUMMARY: &str = "Answer the questions to discover your core values.";

/// Context line for a top value with no authored statistic.
pub const DEFAULT_CONTEXT: &str = "You share this value with millions of Americans.";

/// Placeholder replaced by a value name in discussion prompt templates.
pub const SHARED_VALUE_PLACEHOLDER: &str = "[SHARED_VALUE]";

/// How many values the summary sentence names.
const SUMMARY_VALUE_COUNT: usize = 3;

/// Generates summary, bridging and context text from ranked values.
///
/// All text is deterministic for a given input and library.
#[derive(Clone)]
pub struct InsightGenerator {
    library: Arc<dyn InsightLibrary>,
}

impl InsightGenerator {
    pub fn new(library: Arc<dyn InsightLibrary>) -> Self {
        Self { library }
    }

    /// A sentence naming the top one to three values.
    ///
    /// # Edge Cases
    /// - Empty input: returns [`EMPTY_SUMMARY`]
    /// - Fewer than three values: names whatever is available
    pub fn summary_text(&self, top_values: &[RankedValue]) -> String {
        let names: Vec<&str> = top_values
            .iter()
            .take(SUMMARY_VALUE_COUNT)
            .map(RankedValue::name)
            .collect();

        match names.as_slice() {
            [] => EMPTY_SUMMARY.to_string(),
            [only] => format!("Your top value is {}.", only),
            [first, second] => format!("Your top values are {} and {}.", first, second),
            [init @ .., last] => format!("Your top values are {}, and {}.", init.join(", "), last),
        }
    }

    /// Authored cross-partisan message for the top values, if any.
    ///
    /// Tries the top pair first, then the top value alone. `None` means no
    /// insight is available, not a failure.
    pub fn bridging_statement(&self, top_values: &[RankedValue]) -> Option<String> {
        let first = top_values.first()?;

        if let Some(second) = top_values.get(1) {
            let pair = BridgingKey::pair(first.id().clone(), second.id().clone());
            if let Some(message) = self.library.bridging_message(&pair) {
                return Some(message);
            }
        }

        self.library
            .bridging_message(&BridgingKey::single(first.id().clone()))
    }

    /// Statistic for the top value, or [`DEFAULT_CONTEXT`].
    ///
    /// Returns an empty string when there are no values.
    pub fn context_text(&self, top_values: &[RankedValue]) -> String {
        match top_values.first() {
            Some(top) => self
                .library
                .value_context(top.id())
                .unwrap_or_else(|| DEFAULT_CONTEXT.to_string()),
            None => String::new(),
        }
    }

    /// Discussion prompt about a value two people share.
    ///
    /// `selector` picks the template (modulo the number of templates), so
    /// callers decide whether prompts rotate, repeat or are randomized.
    /// Returns `None` if the library has no prompts.
    pub fn discussion_prompt(&self, shared_value: &CoreValue, selector: usize) -> Option<String> {
        let prompts = self.library.discussion_prompts();
        if prompts.is_empty() {
            return None;
        }

        let template = &prompts[selector % prompts.len()];
        Some(template.replace(SHARED_VALUE_PLACEHOLDER, &shared_value.name))
    }
}

impl fmt::Debug for InsightGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsightGenerator").finish_non_exhaustive()
    }
}
