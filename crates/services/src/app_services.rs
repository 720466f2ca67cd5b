use std::sync::Arc;

use finlit_core::Clock;
use finlit_core::model::ScenarioId;

use crate::catalog::Catalog;
use crate::error::{AppServicesError, QuizStartError};
use crate::progress_service::ProgressTracker;
use crate::progress_view::ProgressSnapshot;
use crate::quiz_session::{QuizOutcome, QuizSession};

/// Assembles the content catalog and the progress tracker.
#[derive(Debug, Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    tracker: ProgressTracker,
}

impl AppServices {
    /// Builds services over the builtin content payload.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the builtin payload fails validation.
    pub fn new(clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = Catalog::load_builtin()?;
        Ok(Self::with_catalog(clock, catalog))
    }

    /// Builds services over an already-loaded catalog.
    #[must_use]
    pub fn with_catalog(clock: Clock, catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tracker: ProgressTracker::new(clock),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Starts the quiz attached to a budget scenario.
    ///
    /// # Errors
    ///
    /// Returns `QuizStartError::UnknownScenario` for an id the catalog does
    /// not know and `QuizStartError::NoQuizForScenario` for a scenario
    /// without a quiz bank.
    pub fn start_scenario_quiz(&self, id: ScenarioId) -> Result<QuizSession, QuizStartError> {
        if self.catalog.scenario(id).is_none() {
            return Err(QuizStartError::UnknownScenario(id));
        }
        let bank = self
            .catalog
            .quiz_for_scenario(id)
            .ok_or(QuizStartError::NoQuizForScenario(id))?;
        Ok(QuizSession::new(bank))
    }

    /// Starts the standalone investment quiz.
    #[must_use]
    pub fn start_investment_quiz(&self) -> QuizSession {
        QuizSession::new(self.catalog.investment_quiz())
    }

    /// Records a finished quiz and returns the resulting snapshot.
    pub fn record_outcome(&self, outcome: &QuizOutcome) -> ProgressSnapshot {
        self.tracker.record_outcome(outcome)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
