use serde::Serialize;
use std::collections::BTreeMap;

use finlit_core::model::{Badge, ProgressState};

/// Immutable snapshot of the learner's progress.
///
/// This is what the presentation layer reads; the mutable state never leaves
/// the tracker. It is intentionally **not** a UI view-model:
/// - no pre-formatted strings beyond the label helpers below
/// - no localization assumptions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub display_name: String,
    pub savings_goal: f64,
    pub current_savings: f64,
    pub lessons_completed: u32,
    pub total_lessons: u32,
    /// Most recent score per quiz category, as integer percentages.
    pub quiz_scores: BTreeMap<String, u8>,
    pub savings_streak: u32,
    /// The badge board, in display order.
    pub badges: Vec<Badge>,
    /// Rounded mean of all recorded quiz scores; `None` until a quiz is
    /// taken.
    pub average_quiz_score: Option<u8>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn from_state(state: &ProgressState) -> Self {
        Self {
            display_name: state.display_name().to_owned(),
            savings_goal: state.savings_goal(),
            current_savings: state.current_savings(),
            lessons_completed: state.lessons_completed(),
            total_lessons: state.total_lessons(),
            quiz_scores: state
                .quiz_scores()
                .iter()
                .map(|(category, score)| (category.clone(), score.value()))
                .collect(),
            savings_streak: state.savings_streak(),
            badges: state.badges().to_vec(),
            average_quiz_score: average_quiz_score(state),
        }
    }

    /// Average score as the profile screen shows it: `"90%"`, or `"N/A"`
    /// before any quiz has been taken.
    #[must_use]
    pub fn average_quiz_score_label(&self) -> String {
        match self.average_quiz_score {
            Some(score) => format!("{score}%"),
            None => "N/A".to_owned(),
        }
    }

    /// Fraction of the savings goal reached, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn savings_progress(&self) -> f64 {
        if self.savings_goal > 0.0 {
            (self.current_savings / self.savings_goal).clamp(0.0, 1.0)
        } else if self.current_savings >= self.savings_goal {
            1.0
        } else {
            0.0
        }
    }

    /// Number of badges earned so far.
    #[must_use]
    pub fn earned_badges(&self) -> usize {
        self.badges.iter().filter(|badge| badge.is_earned()).count()
    }
}

fn average_quiz_score(state: &ProgressState) -> Option<u8> {
    let scores = state.quiz_scores();
    if scores.is_empty() {
        return None;
    }
    let sum: u32 = scores.values().map(|score| u32::from(score.value())).sum();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mean = (f64::from(sum) / scores.len() as f64).round() as u8;
    Some(mean)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
