//! Profile Assembler - composes ranked values and generated text.

use super::{ProfileSize, ShareableProfile};
use crate::domain::foundation::Timestamp;
use crate::domain::insight::InsightGenerator;
use crate::domain::scoring::RankedValue;

/// Builds shareable profiles. The caller supplies the clock.
#[derive(Debug, Clone)]
pub struct ProfileAssembler {
    generator: InsightGenerator,
    size: ProfileSize,
}

impl ProfileAssembler {
    pub fn new(generator: InsightGenerator, size: ProfileSize) -> Self {
        Self { generator, size }
    }

    pub fn size(&self) -> ProfileSize {
        self.size
    }

    pub fn generator(&self) -> &InsightGenerator {
        &self.generator
    }

    /// Keeps the top N values that scored and generates the profile text.
    ///
    /// Values with a zero score were never chosen, so they are not "top"
    /// values. Never fails: when nothing scored the profile has placeholder
    /// summary text, no bridging statement and an empty context.
    pub fn build_profile(&self, top_values: &[RankedValue], now: Timestamp) -> ShareableProfile {
        let top: Vec<RankedValue> = top_values
            .iter()
            .filter(|v| v.score > 0.0)
            .take(self.size.value())
            .cloned()
            .collect();

        ShareableProfile {
            summary: self.generator.summary_text(&top),
            bridging_statement: self.generator.bridging_statement(&top),
            context: self.generator.context_text(&top),
            top_values: top,
            created_at: now,
        }
    }
}
