//! Read-only content records.
//!
//! Lessons, budget scenarios, and investment topics are static configuration
//! supplied at startup. Each record carries everything presentation asks of
//! it, icon and gradient tokens included, so a single id lookup answers
//! every question about an item.

mod invest;
mod lesson;
mod scenario;
mod style;

use thiserror::Error;

pub use invest::InvestTopic;
pub use lesson::LessonTopic;
pub use scenario::{BudgetScenario, SavingsPlan};
pub use style::{CardStyle, Gradient};

/// Errors that can occur while building content records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("content title cannot be empty")]
    EmptyTitle,

    #[error("target amount must be positive")]
    ZeroTargetAmount,

    #[error("time frame cannot be empty")]
    EmptyTimeFrame,
}
