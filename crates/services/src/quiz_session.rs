use finlit_core::model::{QuizBank, QuizQuestion, ScorePercent};

use crate::error::QuizSessionError;

//
// ─── PROGRESS & RESULTS ────────────────────────────────────────────────────────
//

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

/// Outcome of answering a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAnswer {
    pub question_index: usize,
    pub choice: usize,
    pub is_correct: bool,
}

/// Result of a finished quiz, ready to feed the progress tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub category: String,
    pub correct: u32,
    pub total: u32,
    pub score: ScorePercent,
}

impl QuizOutcome {
    /// Message tier shown on the results screen.
    #[must_use]
    pub fn encouragement(&self) -> &'static str {
        match self.score.value() {
            100 => "Perfect score! You're a financial genius! 🌟",
            80..=99 => "Excellent work! You're well on your way to becoming an investing pro! 🚀",
            60..=79 => "Good job! Keep learning and you'll master investing in no time! 📈",
            _ => "Keep practicing! Every investment master started as a beginner! 💪",
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory walk through one quiz bank's questions, in order.
///
/// The session owns a copy of the questions, so content can stay shared and
/// read-only while the learner answers.
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: String,
    questions: Vec<QuizQuestion>,
    current: usize,
    correct: u32,
}

impl QuizSession {
    /// Starts a session over the bank's questions. Banks are validated
    /// non-empty, so a fresh session always has a current question.
    #[must_use]
    pub fn new(bank: &QuizBank) -> Self {
        Self {
            category: bank.category().to_owned(),
            questions: bank.questions().to_vec(),
            current: 0,
            correct: 0,
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions already answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Answers the current question and advances.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Completed` if every question has been
    /// answered, or `QuizSessionError::InvalidChoice` if `choice` is not an
    /// option index of the current question.
    pub fn answer(&mut self, choice: usize) -> Result<QuizAnswer, QuizSessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(QuizSessionError::Completed);
        };
        if choice >= question.options().len() {
            return Err(QuizSessionError::InvalidChoice {
                choice,
                options: question.options().len(),
            });
        }

        let is_correct = question.is_correct(choice);
        if is_correct {
            self.correct += 1;
        }

        let answer = QuizAnswer {
            question_index: self.current,
            choice,
            is_correct,
        };
        self.current += 1;
        Ok(answer)
    }

    /// Clears all answers and starts over ("Try Again").
    pub fn reset(&mut self) {
        self.current = 0;
        self.correct = 0;
    }

    /// The scored outcome of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::NotFinished` while questions remain.
    pub fn outcome(&self) -> Result<QuizOutcome, QuizSessionError> {
        if !self.is_complete() {
            return Err(QuizSessionError::NotFinished {
                remaining: self.remaining(),
            });
        }

        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        let score = ScorePercent::from_answers(self.correct, total)?;
        Ok(QuizOutcome {
            category: self.category.clone(),
            correct: self.correct,
            total,
            score,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> QuizBank {
        let questions = vec![
            QuizQuestion::new("q1", vec!["a".into(), "b".into()], 0).unwrap(),
            QuizQuestion::new("q2", vec!["a".into(), "b".into(), "c".into()], 2).unwrap(),
            QuizQuestion::new("q3", vec!["a".into(), "b".into()], 1).unwrap(),
        ];
        QuizBank::new("Budget", None, questions).unwrap()
    }

    #[test]
    fn session_walks_questions_in_order() {
        let mut session = QuizSession::new(&bank());
        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.current_question().unwrap().prompt(), "q1");

        let first = session.answer(0).unwrap();
        assert!(first.is_correct);
        assert_eq!(first.question_index, 0);

        let second = session.answer(1).unwrap();
        assert!(!second.is_correct);

        assert!(!session.is_complete());
        session.answer(1).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn progress_tracks_answered_and_remaining() {
        let mut session = QuizSession::new(&bank());
        session.answer(0).unwrap();
        let progress = session.progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.is_complete);
    }

    #[test]
    fn answer_rejects_out_of_range_choice() {
        let mut session = QuizSession::new(&bank());
        let err = session.answer(5).unwrap_err();
        assert_eq!(
            err,
            QuizSessionError::InvalidChoice {
                choice: 5,
                options: 2
            }
        );
        // The failed answer did not advance the session.
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn answer_after_completion_is_an_error() {
        let mut session = QuizSession::new(&bank());
        for _ in 0..3 {
            session.answer(0).unwrap();
        }
        assert_eq!(session.answer(0).unwrap_err(), QuizSessionError::Completed);
    }

    #[test]
    fn outcome_requires_a_finished_session() {
        let mut session = QuizSession::new(&bank());
        session.answer(0).unwrap();
        assert_eq!(
            session.outcome().unwrap_err(),
            QuizSessionError::NotFinished { remaining: 2 }
        );
    }

    #[test]
    fn outcome_rounds_the_score() {
        let mut session = QuizSession::new(&bank());
        session.answer(0).unwrap(); // correct
        session.answer(2).unwrap(); // correct
        session.answer(0).unwrap(); // wrong

        let outcome = session.outcome().unwrap();
        assert_eq!(outcome.category, "Budget");
        assert_eq!(outcome.correct, 2);
        assert_eq!(outcome.total, 3);
        assert_eq!(outcome.score.value(), 67);
    }

    #[test]
    fn reset_clears_answers() {
        let mut session = QuizSession::new(&bank());
        session.answer(0).unwrap();
        session.answer(2).unwrap();
        session.reset();
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.correct_count(), 0);
        assert_eq!(session.current_question().unwrap().prompt(), "q1");
    }

    #[test]
    fn encouragement_tiers_follow_the_score() {
        let outcome = |value: u8| QuizOutcome {
            category: "Investment".to_owned(),
            correct: 0,
            total: 5,
            score: ScorePercent::new(value).unwrap(),
        };
        assert!(outcome(100).encouragement().starts_with("Perfect score"));
        assert!(outcome(80).encouragement().starts_with("Excellent work"));
        assert!(outcome(60).encouragement().starts_with("Good job"));
        assert!(outcome(59).encouragement().starts_with("Keep practicing"));
    }
}
