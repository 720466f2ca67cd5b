use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::model::badge::{Badge, BadgeId};
use crate::model::quiz::ScorePercent;

//
// ─── PROGRESS STATE ────────────────────────────────────────────────────────────
//

/// Learner progress for one process lifetime.
///
/// Created once with default values and mutated exclusively through the
/// operations below. Every mutator except [`ProgressState::update_profile`]
/// re-derives the badge board, and earned flags only ever move false→true.
///
/// Savings amounts are not validated: the presentation layer drops input it
/// cannot parse, and anything it does hand over (negative values included) is
/// recorded as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressState {
    display_name: String,
    savings_goal: f64,
    current_savings: f64,
    lessons_completed: u32,
    quiz_scores: BTreeMap<String, ScorePercent>,
    savings_streak: u32,
    badges: [Badge; 5],
}

impl Default for ProgressState {
    /// Starting progress. Badges begin unearned even though the default
    /// savings are positive; rules only run in response to an operation.
    fn default() -> Self {
        Self {
            display_name: "Teen Investor".to_owned(),
            savings_goal: 1000.0,
            current_savings: 250.0,
            lessons_completed: 0,
            quiz_scores: BTreeMap::new(),
            savings_streak: 0,
            badges: Badge::starting_board(),
        }
    }
}

impl ProgressState {
    /// Number of lessons the curriculum ships with.
    pub const TOTAL_LESSONS: u32 = 7;

    /// Quiz category whose high scores promote the Budget Master badge.
    pub const BUDGET_CATEGORY: &'static str = "Budget";

    /// Quiz category whose high scores promote the Investment Rookie badge.
    pub const INVESTMENT_CATEGORY: &'static str = "Investment";

    /// Score threshold for the category promotions.
    pub const PROMOTION_THRESHOLD: u8 = 80;

    // ─── Operations ────────────────────────────────────────────────────────

    /// Replaces the current savings amount.
    ///
    /// The streak adjustments are two independent checks, applied in this
    /// order: an increase bumps the streak, and a resulting balance of
    /// exactly zero clears it. They are deliberately not a single three-way
    /// transition.
    pub fn set_savings(&mut self, amount: f64, now: DateTime<Utc>) {
        let previous = self.current_savings;
        self.current_savings = amount;

        if self.current_savings > previous {
            self.savings_streak += 1;
        }
        if self.current_savings == 0.0 {
            self.savings_streak = 0;
        }

        self.evaluate_badges(now);
    }

    /// Records one finished lesson.
    ///
    /// The counter is not clamped to [`Self::TOTAL_LESSONS`].
    pub fn complete_lesson(&mut self, now: DateTime<Utc>) {
        self.lessons_completed += 1;
        self.evaluate_badges(now);
    }

    /// Records the most recent score for a quiz category, overwriting any
    /// earlier attempt in the same category.
    pub fn record_quiz_score(
        &mut self,
        category: impl Into<String>,
        score: ScorePercent,
        now: DateTime<Utc>,
    ) {
        let category = category.into();
        self.quiz_scores.insert(category.clone(), score);
        self.evaluate_badges(now);

        // Category promotions on top of the general rules. These match the
        // category exactly, unlike the substring rules above.
        if category == Self::BUDGET_CATEGORY && score.value() >= Self::PROMOTION_THRESHOLD {
            self.award(BadgeId::BudgetMaster, now);
        }
        if category == Self::INVESTMENT_CATEGORY && score.value() >= Self::PROMOTION_THRESHOLD {
            self.award(BadgeId::InvestmentRookie, now);
        }
    }

    /// Overwrites the profile name and savings goal unconditionally.
    ///
    /// Badge rules are not re-run here; a lowered goal is only noticed by the
    /// next savings, lesson, or quiz operation.
    pub fn update_profile(&mut self, name: impl Into<String>, goal: f64) {
        self.display_name = name.into();
        self.savings_goal = goal;
    }

    // ─── Badge rules ───────────────────────────────────────────────────────

    /// Re-derives every badge from current state. Idempotent; a rule that no
    /// longer holds never clears an earned flag.
    fn evaluate_badges(&mut self, now: DateTime<Utc>) {
        if self.current_savings > 0.0 {
            self.award(BadgeId::SavingsStarter, now);
        }
        // Category matching is substring containment, so e.g. a
        // "Budget Basics" quiz also counts.
        if self
            .quiz_scores
            .keys()
            .any(|key| key.contains(Self::BUDGET_CATEGORY))
        {
            self.award(BadgeId::BudgetMaster, now);
        }
        if self
            .quiz_scores
            .keys()
            .any(|key| key.contains(Self::INVESTMENT_CATEGORY))
        {
            self.award(BadgeId::InvestmentRookie, now);
        }
        if self.quiz_scores.values().any(|score| score.is_perfect()) {
            self.award(BadgeId::QuizChampion, now);
        }
        if self.current_savings >= self.savings_goal {
            self.award(BadgeId::GoalAchiever, now);
        }
    }

    fn award(&mut self, id: BadgeId, now: DateTime<Utc>) {
        self.badges[id as usize].award(now);
    }

    // ─── Accessors ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn savings_goal(&self) -> f64 {
        self.savings_goal
    }

    #[must_use]
    pub fn current_savings(&self) -> f64 {
        self.current_savings
    }

    #[must_use]
    pub fn lessons_completed(&self) -> u32 {
        self.lessons_completed
    }

    #[must_use]
    pub fn total_lessons(&self) -> u32 {
        Self::TOTAL_LESSONS
    }

    /// Most recent score per quiz category.
    #[must_use]
    pub fn quiz_scores(&self) -> &BTreeMap<String, ScorePercent> {
        &self.quiz_scores
    }

    #[must_use]
    pub fn savings_streak(&self) -> u32 {
        self.savings_streak
    }

    /// The badge board, in display order.
    #[must_use]
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    #[must_use]
    pub fn badge(&self, id: BadgeId) -> &Badge {
        // The board is built from `BadgeId::ALL`, so position == discriminant.
        &self.badges[id as usize]
    }

    #[must_use]
    pub fn earned_badges(&self) -> usize {
        self.badges.iter().filter(|badge| badge.is_earned()).count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
