//! Shared error types for the services crate.

use thiserror::Error;

use finlit_core::model::{ContentError, InvestTopicId, LessonId, QuizError, ScenarioId};

/// Errors emitted while loading and validating the content catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog payload is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("duplicate lesson id {0}")]
    DuplicateLesson(LessonId),

    #[error("duplicate scenario id {0}")]
    DuplicateScenario(ScenarioId),

    #[error("duplicate investment topic id {0}")]
    DuplicateInvestTopic(InvestTopicId),

    #[error("quiz bank references unknown scenario {0}")]
    UnknownQuizScenario(ScenarioId),

    #[error("more than one quiz bank for scenario {0}")]
    DuplicateScenarioQuiz(ScenarioId),

    #[error("unexpected standalone quiz bank for category {0:?}")]
    ExtraStandaloneQuiz(String),

    #[error("catalog has no investment quiz")]
    MissingInvestmentQuiz,
}

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("quiz already completed")]
    Completed,

    #[error("quiz still has {remaining} unanswered questions")]
    NotFinished { remaining: usize },

    #[error("choice {choice} is out of range for {options} options")]
    InvalidChoice { choice: usize, options: usize },

    #[error(transparent)]
    Score(#[from] QuizError),
}

/// Errors emitted when starting a quiz from the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizStartError {
    #[error("unknown budget scenario {0}")]
    UnknownScenario(ScenarioId),

    #[error("scenario {0} has no quiz")]
    NoQuizForScenario(ScenarioId),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
