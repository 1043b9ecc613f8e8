//! YAML-backed insight content.
//!
//! Lets editorial staff replace the built-in tables with a file:
//!
//! ```yaml
//! bridging:
//!   "fairness+freedom": "You value both fairness and freedom..."
//!   "truth": "Honesty is where every conversation starts."
//! value_context:
//!   fairness: "90% of Americans believe everyone deserves a fair chance..."
//! discussion_prompts:
//!   - "You both value [SHARED_VALUE]. Why?"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::domain::catalog::ValueCatalog;
use crate::domain::foundation::{ValidationError, ValueId};
use crate::domain::insight::BridgingKey;
use crate::ports::{ContentError, InsightLibrary};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct InsightDocument {
    #[serde(default)]
    bridging: BTreeMap<String, String>,
    #[serde(default)]
    value_context: BTreeMap<String, String>,
    #[serde(default)]
    discussion_prompts: Vec<String>,
}

/// Insight library loaded from a YAML document and checked against a catalog.
#[derive(Debug, Clone, Default)]
pub struct YamlInsightLibrary {
    bridging: HashMap<BridgingKey, String>,
    context: HashMap<ValueId, String>,
    prompts: Vec<String>,
}

impl YamlInsightLibrary {
    /// Parses YAML content.
    ///
    /// # Errors
    ///
    /// - `Parse` if the document is not valid YAML of the expected shape
    /// - `InvalidKey` if a bridging key is not `value` or `value+value`
    /// - `UnknownValue` if any id is missing from `catalog`
    pub fn from_yaml_str(yaml: &str, catalog: &ValueCatalog) -> Result<Self, ContentError> {
        let document: InsightDocument = serde_yaml::from_str(yaml)?;

        let mut bridging = HashMap::with_capacity(document.bridging.len());
        for (raw_key, message) in document.bridging {
            let key: BridgingKey = raw_key.parse().map_err(|e: ValidationError| {
                ContentError::InvalidKey {
                    key: raw_key.clone(),
                    reason: e.to_string(),
                }
            })?;
            if let Some(unknown) = key.value_ids().iter().find(|id| !catalog.contains(id)) {
                return Err(ContentError::UnknownValue(unknown.to_string()));
            }
            bridging.insert(key, message);
        }

        let mut context = HashMap::with_capacity(document.value_context.len());
        for (raw_id, text) in document.value_context {
            let id = ValueId::new(raw_id);
            if !catalog.contains(&id) {
                return Err(ContentError::UnknownValue(id.to_string()));
            }
            context.insert(id, text);
        }

        tracing::debug!(
            bridging = bridging.len(),
            value_context = context.len(),
            discussion_prompts = document.discussion_prompts.len(),
            "Loaded insight content"
        );

        Ok(Self {
            bridging,
            context,
            prompts: document.discussion_prompts,
        })
    }

    /// Reads and parses a YAML content file.
    pub fn from_path(path: &Path, catalog: &ValueCatalog) -> Result<Self, ContentError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml, catalog)
    }
}

impl InsightLibrary for YamlInsightLibrary {
    fn bridging_message(&self, key: &BridgingKey) -> Option<String> {
        self.bridging.get(key).cloned()
    }

    fn value_context(&self, value_id: &ValueId) -> Option<String> {
        self.context.get(value_id).cloned()
    }

    fn discussion_prompts(&self) -> Vec<String> {
        self.prompts.clone()
    }
}
