//! ValuesEngine - shared state wiring the quiz handlers together.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::adapters::content::{StaticInsightLibrary, YamlInsightLibrary};
use crate::application::handlers::{
    CompareValuesHandler, CompleteQuizHandler, QuizSession,
};
use crate::config::AppConfig;
use crate::domain::catalog::ValueCatalog;
use crate::domain::foundation::DomainError;
use crate::domain::insight::InsightGenerator;
use crate::domain::profile::{ProfileAssembler, ProfileSize};
use crate::domain::quiz::QuestionBank;
use crate::domain::scoring::ScoringEngine;
use crate::ports::InsightLibrary;

/// Built-in catalog and question bank plus the configured insight content.
///
/// Cheap to clone; handlers are created on demand from the shared state.
#[derive(Clone)]
pub struct ValuesEngine {
    catalog: &'static ValueCatalog,
    bank: &'static QuestionBank,
    library: Arc<dyn InsightLibrary>,
    profile_size: ProfileSize,
}

impl ValuesEngine {
    /// Engine over the standard catalog and bank with the given content.
    pub fn new(library: Arc<dyn InsightLibrary>, profile_size: ProfileSize) -> Self {
        Self {
            catalog: ValueCatalog::standard(),
            bank: QuestionBank::standard(),
            library,
            profile_size,
        }
    }

    /// Wires an engine from configuration.
    ///
    /// Uses the YAML insight file when `content.insights_path` is set and
    /// the built-in tables otherwise.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the profile size is outside 3..=5
    /// - `ContentLoadFailed` if the insight file cannot be read or parsed
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let profile_size = config
            .engine
            .profile_size()
            .map_err(|e| DomainError::validation("engine.profile_size", e.to_string()))?;

        let catalog = ValueCatalog::standard();
        let library: Arc<dyn InsightLibrary> = match &config.content.insights_path {
            Some(path) => {
                info!(path = %path.display(), "Loading insight content");
                Arc::new(YamlInsightLibrary::from_path(path, catalog)?)
            }
            None => Arc::new(StaticInsightLibrary::new()),
        };

        Ok(Self::new(library, profile_size))
    }

    pub fn catalog(&self) -> &'static ValueCatalog {
        self.catalog
    }

    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    pub fn profile_size(&self) -> ProfileSize {
        self.profile_size
    }

    pub fn scoring_engine(&self) -> ScoringEngine<'static> {
        ScoringEngine::new(self.catalog, self.bank)
    }

    pub fn insight_generator(&self) -> InsightGenerator {
        InsightGenerator::new(self.library.clone())
    }

    /// Fresh session positioned on the intro screen.
    pub fn new_session(&self) -> QuizSession<'static> {
        QuizSession::new(self.bank)
    }

    pub fn complete_quiz_handler(&self) -> CompleteQuizHandler<'static> {
        CompleteQuizHandler::new(
            self.scoring_engine(),
            ProfileAssembler::new(self.insight_generator(), self.profile_size),
        )
    }

    pub fn compare_values_handler(&self) -> CompareValuesHandler<'static> {
        CompareValuesHandler::new(self.catalog, self.insight_generator())
    }
}

impl Default for ValuesEngine {
    fn default() -> Self {
        Self::new(Arc::new(StaticInsightLibrary::new()), ProfileSize::default())
    }
}

impl fmt::Debug for ValuesEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesEngine")
            .field("values", &self.catalog.len())
            .field("questions", &self.bank.len())
            .field("profile_size", &self.profile_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use std::path::PathBuf;

    #[test]
    fn default_config_uses_built_in_content() {
        let engine = ValuesEngine::from_config(&AppConfig::default()).unwrap();

        assert_eq!(engine.profile_size().value(), 5);
        assert_eq!(engine.catalog().len(), 12);
        assert_eq!(engine.bank().len(), 10);
    }

    #[test]
    fn invalid_profile_size_is_rejected() {
        let mut config = AppConfig::default();
        config.engine.profile_size = 2;

        let err = ValuesEngine::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn missing_insights_file_fails_to_load() {
        let mut config = AppConfig::default();
        config.content.insights_path = Some(PathBuf::from("/no/such/insights.yaml"));

        let err = ValuesEngine::from_config(&config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentLoadFailed);
    }
}
