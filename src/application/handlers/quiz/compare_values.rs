//! CompareValuesHandler - Query handler for pair mode.
//!
//! Two people bring their top values; the handler finds what they share
//! and attaches a conversation starter to each shared value.

use serde::Serialize;
use tracing::debug;

use crate::domain::catalog::{CoreValue, ValueCatalog};
use crate::domain::foundation::ValueId;
use crate::domain::insight::{find_shared_values, InsightGenerator};

/// Query comparing two top-value lists.
#[derive(Debug, Clone, Default)]
pub struct CompareValuesQuery {
    pub first: Vec<ValueId>,
    pub second: Vec<ValueId>,
    /// Picks the first prompt template; later shared values rotate on from it.
    pub prompt_selector: usize,
}

/// A value both people hold, with a prompt to talk about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SharedValueInsight {
    pub value: CoreValue,
    pub discussion_prompt: Option<String>,
}

/// Result of a comparison, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareValuesResult {
    pub shared: Vec<SharedValueInsight>,
}

impl CompareValuesResult {
    pub fn has_common_ground(&self) -> bool {
        !self.shared.is_empty()
    }
}

/// Handler for pair-mode comparisons.
#[derive(Debug, Clone)]
pub struct CompareValuesHandler<'a> {
    catalog: &'a ValueCatalog,
    generator: InsightGenerator,
}

impl<'a> CompareValuesHandler<'a> {
    pub fn new(catalog: &'a ValueCatalog, generator: InsightGenerator) -> Self {
        Self { catalog, generator }
    }

    pub fn handle(&self, query: CompareValuesQuery) -> CompareValuesResult {
        let shared: Vec<SharedValueInsight> =
            find_shared_values(self.catalog, &query.first, &query.second)
                .into_iter()
                .enumerate()
                .map(|(offset, value)| {
                    let discussion_prompt = self
                        .generator
                        .discussion_prompt(&value, query.prompt_selector.wrapping_add(offset));
                    SharedValueInsight {
                        value,
                        discussion_prompt,
                    }
                })
                .collect();

        debug!(shared = shared.len(), "Compared value lists");

        CompareValuesResult { shared }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::StaticInsightLibrary;
    use std::sync::Arc;

    fn handler() -> CompareValuesHandler<'static> {
        CompareValuesHandler::new(
            ValueCatalog::standard(),
            InsightGenerator::new(Arc::new(StaticInsightLibrary::new())),
        )
    }

    fn ids(ids: &[&str]) -> Vec<ValueId> {
        ids.iter().map(|id| ValueId::from(*id)).collect()
    }

    #[test]
    fn shared_values_carry_named_prompts() {
        let result = handler().handle(CompareValuesQuery {
            first: ids(&["community", "truth", "freedom"]),
            second: ids(&["truth", "community", "voice"]),
            prompt_selector: 0,
        });

        assert!(result.has_common_ground());
        let names: Vec<&str> = result.shared.iter().map(|s| s.value.name.as_str()).collect();
        assert_eq!(names, vec!["Community", "Truth & Honesty"]);

        for insight in &result.shared {
            let prompt = insight.discussion_prompt.as_deref().unwrap();
            assert!(prompt.contains(&insight.value.name));
            assert!(!prompt.contains("[SHARED_VALUE]"));
        }
        assert_ne!(
            result.shared[0].discussion_prompt,
            result.shared[1].discussion_prompt
        );
    }

    #[test]
    fn disjoint_lists_share_nothing() {
        let result = handler().handle(CompareValuesQuery {
            first: ids(&["fairness"]),
            second: ids(&["tradition"]),
            prompt_selector: 3,
        });

        assert!(!result.has_common_ground());
    }
}
