mod badge;
pub mod content;
mod ids;
mod progress;
mod quiz;

pub use content::{
    BudgetScenario, CardStyle, ContentError, Gradient, InvestTopic, LessonTopic, SavingsPlan,
};
pub use ids::{InvestTopicId, LessonId, ScenarioId};

pub use badge::{Badge, BadgeId};
pub use progress::ProgressState;
pub use quiz::{QuizBank, QuizError, QuizQuestion, ScorePercent};
