use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── BADGE IDENTITY ────────────────────────────────────────────────────────────
//

/// The five achievement badges.
///
/// Membership is fixed for the life of the process; only the earned flag on
/// [`Badge`] ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BadgeId {
    SavingsStarter,
    BudgetMaster,
    InvestmentRookie,
    QuizChampion,
    GoalAchiever,
}

impl BadgeId {
    /// All badges, in profile display order.
    pub const ALL: [BadgeId; 5] = [
        BadgeId::SavingsStarter,
        BadgeId::BudgetMaster,
        BadgeId::InvestmentRookie,
        BadgeId::QuizChampion,
        BadgeId::GoalAchiever,
    ];

    /// Stable display name. Acts as the badge key in exported data.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BadgeId::SavingsStarter => "Savings Starter",
            BadgeId::BudgetMaster => "Budget Master",
            BadgeId::InvestmentRookie => "Investment Rookie",
            BadgeId::QuizChampion => "Quiz Champion",
            BadgeId::GoalAchiever => "Goal Achiever",
        }
    }

    /// Opaque icon symbol, passed through to presentation unmodified.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            BadgeId::SavingsStarter => "star.fill",
            BadgeId::BudgetMaster => "chart.pie.fill",
            BadgeId::InvestmentRookie => "dollarsign.circle.fill",
            BadgeId::QuizChampion => "crown.fill",
            BadgeId::GoalAchiever => "flag.fill",
        }
    }

    /// Static description shown under the badge.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            BadgeId::SavingsStarter => "Started your savings journey!",
            BadgeId::BudgetMaster => "Created your first budget",
            BadgeId::InvestmentRookie => "Learn about investments",
            BadgeId::QuizChampion => "Score 100% on any quiz",
            BadgeId::GoalAchiever => "Reach your first savings goal",
        }
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//
// ─── BADGE ─────────────────────────────────────────────────────────────────────
//

/// A named achievement flag. Earned monotonically, never revoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    id: BadgeId,
    earned: bool,
    earned_at: Option<DateTime<Utc>>,
}

impl Badge {
    /// Creates the badge in its unearned starting state.
    #[must_use]
    pub fn unearned(id: BadgeId) -> Self {
        Self {
            id,
            earned: false,
            earned_at: None,
        }
    }

    /// The starting badge board: all five badges, none earned.
    #[must_use]
    pub fn starting_board() -> [Badge; 5] {
        BadgeId::ALL.map(Badge::unearned)
    }

    #[must_use]
    pub fn id(&self) -> BadgeId {
        self.id
    }

    #[must_use]
    pub fn is_earned(&self) -> bool {
        self.earned
    }

    /// When the badge was first earned, if it has been.
    #[must_use]
    pub fn earned_at(&self) -> Option<DateTime<Utc>> {
        self.earned_at
    }

    /// Marks the badge earned. Awarding an already-earned badge is a no-op
    /// and keeps the original award instant.
    pub fn award(&mut self, now: DateTime<Utc>) {
        if !self.earned {
            self.earned = true;
            self.earned_at = Some(now);
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn starting_board_is_unearned_and_in_display_order() {
        let board = Badge::starting_board();
        assert_eq!(board.len(), 5);
        for (badge, id) in board.iter().zip(BadgeId::ALL) {
            assert_eq!(badge.id(), id);
            assert!(!badge.is_earned());
            assert_eq!(badge.earned_at(), None);
        }
    }

    #[test]
    fn award_sets_flag_and_instant() {
        let mut badge = Badge::unearned(BadgeId::QuizChampion);
        badge.award(fixed_now());
        assert!(badge.is_earned());
        assert_eq!(badge.earned_at(), Some(fixed_now()));
    }

    #[test]
    fn second_award_keeps_original_instant() {
        let mut badge = Badge::unearned(BadgeId::SavingsStarter);
        let first = fixed_now();
        badge.award(first);
        badge.award(first + Duration::days(3));
        assert!(badge.is_earned());
        assert_eq!(badge.earned_at(), Some(first));
    }

    #[test]
    fn display_uses_stable_name() {
        assert_eq!(BadgeId::GoalAchiever.to_string(), "Goal Achiever");
        assert_eq!(BadgeId::BudgetMaster.icon(), "chart.pie.fill");
    }
}
