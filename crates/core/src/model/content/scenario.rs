use crate::model::content::{CardStyle, ContentError};
use crate::model::ids::ScenarioId;

//
// ─── SAVINGS PLAN ──────────────────────────────────────────────────────────────
//

/// The fixed numbers behind a scenario's savings activity.
///
/// `time_frame` and `monthly_saving` are display strings ("3 weeks",
/// "$8.33/week"); only the target amount is a number the activity computes
/// with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsPlan {
    target_amount: u32,
    time_frame: String,
    monthly_saving: String,
}

impl SavingsPlan {
    /// Creates a savings plan.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::ZeroTargetAmount` for a zero target and
    /// `ContentError::EmptyTimeFrame` for a blank time frame.
    pub fn new(
        target_amount: u32,
        time_frame: impl Into<String>,
        monthly_saving: impl Into<String>,
    ) -> Result<Self, ContentError> {
        if target_amount == 0 {
            return Err(ContentError::ZeroTargetAmount);
        }
        let time_frame = time_frame.into();
        if time_frame.trim().is_empty() {
            return Err(ContentError::EmptyTimeFrame);
        }

        Ok(Self {
            target_amount,
            time_frame,
            monthly_saving: monthly_saving.into(),
        })
    }

    /// Target amount in whole dollars.
    #[must_use]
    pub fn target_amount(&self) -> u32 {
        self.target_amount
    }

    #[must_use]
    pub fn time_frame(&self) -> &str {
        &self.time_frame
    }

    #[must_use]
    pub fn monthly_saving(&self) -> &str {
        &self.monthly_saving
    }

    /// Fraction of the target reached at `saved` dollars, clamped to
    /// `0.0..=1.0`.
    #[must_use]
    pub fn progress_toward(&self, saved: u32) -> f64 {
        (f64::from(saved) / f64::from(self.target_amount)).clamp(0.0, 1.0)
    }

    /// Dollars still missing at `saved`.
    #[must_use]
    pub fn remaining(&self, saved: u32) -> u32 {
        self.target_amount.saturating_sub(saved)
    }
}

//
// ─── BUDGET SCENARIO ───────────────────────────────────────────────────────────
//

/// A scripted budgeting exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetScenario {
    id: ScenarioId,
    title: String,
    description: String,
    key_points: Vec<String>,
    activity: String,
    plan: SavingsPlan,
    style: CardStyle,
}

impl BudgetScenario {
    /// Creates a budget scenario.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ScenarioId,
        title: impl Into<String>,
        description: impl Into<String>,
        key_points: Vec<String>,
        activity: impl Into<String>,
        plan: SavingsPlan,
        style: CardStyle,
    ) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            key_points,
            activity: activity.into(),
            plan,
            style,
        })
    }

    #[must_use]
    pub fn id(&self) -> ScenarioId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn key_points(&self) -> &[String] {
        &self.key_points
    }

    /// What the learner is asked to do in the savings tracker.
    #[must_use]
    pub fn activity(&self) -> &str {
        &self.activity
    }

    #[must_use]
    pub fn plan(&self) -> &SavingsPlan {
        &self.plan
    }

    #[must_use]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
