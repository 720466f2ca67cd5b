use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{debug, info};

use finlit_core::Clock;
use finlit_core::model::{Badge, BadgeId, ProgressState, ScorePercent};

use crate::progress_view::ProgressSnapshot;
use crate::quiz_session::QuizOutcome;

/// Controller owning the learner's progress state.
///
/// Each operation locks the state, applies one mutation to completion, and
/// publishes the resulting [`ProgressSnapshot`] on a watch channel, so
/// observers only ever see whole snapshots and never partially applied
/// updates.
///
/// Every operation is total: malformed input is a presentation-layer no-op
/// and never reaches the tracker.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    clock: Clock,
    state: Arc<Mutex<ProgressState>>,
    updates: Arc<watch::Sender<ProgressSnapshot>>,
}

impl ProgressTracker {
    /// Creates a tracker with default starting progress.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        let state = ProgressState::default();
        let (updates, _) = watch::channel(ProgressSnapshot::from_state(&state));
        Self {
            clock,
            state: Arc::new(Mutex::new(state)),
            updates: Arc::new(updates),
        }
    }

    /// Subscribes to progress snapshots.
    ///
    /// The receiver immediately holds the current snapshot and observes every
    /// later operation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ProgressSnapshot> {
        self.updates.subscribe()
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        self.updates.borrow().clone()
    }

    /// Replaces the current savings amount and returns the new snapshot.
    pub fn set_savings(&self, amount: f64) -> ProgressSnapshot {
        self.apply("set_savings", |state, now| state.set_savings(amount, now))
    }

    /// Records one completed lesson.
    pub fn complete_lesson(&self) -> ProgressSnapshot {
        self.apply("complete_lesson", |state, now| state.complete_lesson(now))
    }

    /// Records the most recent score for a quiz category.
    pub fn record_quiz_score(
        &self,
        category: impl Into<String>,
        score: ScorePercent,
    ) -> ProgressSnapshot {
        let category = category.into();
        self.apply("record_quiz_score", move |state, now| {
            state.record_quiz_score(category, score, now);
        })
    }

    /// Records a finished quiz session's outcome.
    pub fn record_outcome(&self, outcome: &QuizOutcome) -> ProgressSnapshot {
        self.record_quiz_score(outcome.category.clone(), outcome.score)
    }

    /// Overwrites the profile name and savings goal.
    pub fn update_profile(&self, name: impl Into<String>, goal: f64) -> ProgressSnapshot {
        let name = name.into();
        self.apply("update_profile", move |state, _now| {
            state.update_profile(name, goal);
        })
    }

    fn apply(
        &self,
        op: &'static str,
        mutate: impl FnOnce(&mut ProgressState, DateTime<Utc>),
    ) -> ProgressSnapshot {
        let now = self.clock.now();
        let snapshot = {
            let mut state = self.lock_state();
            let earned_before: Vec<BadgeId> = state
                .badges()
                .iter()
                .filter(|badge| badge.is_earned())
                .map(Badge::id)
                .collect();

            mutate(&mut state, now);

            for badge in state.badges().iter().filter(|badge| badge.is_earned()) {
                if !earned_before.contains(&badge.id()) {
                    info!(badge = %badge.id(), "badge earned");
                }
            }
            ProgressSnapshot::from_state(&state)
        };

        debug!(op, "progress operation applied");
        self.updates.send_replace(snapshot.clone());
        snapshot
    }

    fn lock_state(&self) -> MutexGuard<'_, ProgressState> {
        // A poisoned lock still holds valid state; take it.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use finlit_core::time::{fixed_clock, fixed_now};

    fn tracker() -> ProgressTracker {
        ProgressTracker::new(fixed_clock())
    }

    #[test]
    fn fresh_tracker_publishes_default_snapshot() {
        let tracker = tracker();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.display_name, "Teen Investor");
        assert_eq!(snapshot.current_savings, 250.0);
        assert_eq!(snapshot.earned_badges(), 0);
    }

    #[test]
    fn operations_return_the_published_snapshot() {
        let tracker = tracker();
        let returned = tracker.set_savings(500.0);
        assert_eq!(returned, tracker.snapshot());
        assert_eq!(returned.current_savings, 500.0);
        assert_eq!(returned.savings_streak, 1);
    }

    #[test]
    fn subscribers_observe_every_operation() {
        let tracker = tracker();
        let mut updates = tracker.subscribe();
        assert_eq!(updates.borrow().current_savings, 250.0);

        tracker.set_savings(750.0);
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().current_savings, 750.0);

        tracker.complete_lesson();
        assert_eq!(updates.borrow_and_update().lessons_completed, 1);
    }

    #[test]
    fn clones_share_the_same_state() {
        let tracker = tracker();
        let other = tracker.clone();
        other.complete_lesson();
        assert_eq!(tracker.snapshot().lessons_completed, 1);
    }

    #[test]
    fn badge_award_instants_come_from_the_clock() {
        let tracker = tracker();
        let snapshot = tracker.set_savings(300.0);
        let starter = snapshot
            .badges
            .iter()
            .find(|badge| badge.id() == BadgeId::SavingsStarter)
            .unwrap();
        assert_eq!(starter.earned_at(), Some(fixed_now()));
    }

    #[test]
    fn record_outcome_feeds_the_category_score() {
        let tracker = tracker();
        let outcome = QuizOutcome {
            category: "Investment".to_owned(),
            correct: 5,
            total: 5,
            score: ScorePercent::new(100).unwrap(),
        };
        let snapshot = tracker.record_outcome(&outcome);
        assert_eq!(snapshot.quiz_scores.get("Investment"), Some(&100));
        assert!(
            snapshot
                .badges
                .iter()
                .any(|badge| badge.id() == BadgeId::QuizChampion && badge.is_earned())
        );
    }

    #[test]
    fn update_profile_publishes_without_badge_changes() {
        let tracker = tracker();
        let snapshot = tracker.update_profile("Ada", 100.0);
        assert_eq!(snapshot.display_name, "Ada");
        assert_eq!(snapshot.savings_goal, 100.0);
        assert_eq!(snapshot.earned_badges(), 0);
    }
}
