use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::model::ids::ScenarioId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur while building quiz content or scores.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("score percent must be at most 100, got {0}")]
    ScoreOutOfRange(u8),

    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("quiz category cannot be empty")]
    EmptyCategory,

    #[error("quiz question prompt cannot be empty")]
    EmptyPrompt,

    #[error("quiz question needs at least two options, got {0}")]
    NotEnoughOptions(usize),

    #[error("correct answer index {index} is out of range for {options} options")]
    CorrectAnswerOutOfRange { index: usize, options: usize },
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// Integer percentage score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ScorePercent(u8);

impl ScorePercent {
    /// Creates a score from a raw percentage.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::ScoreOutOfRange` for values above 100.
    pub fn new(value: u8) -> Result<Self, QuizError> {
        if value > 100 {
            return Err(QuizError::ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Derives the rounded percentage for `correct` answers out of `total`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` when `total` is zero.
    pub fn from_answers(correct: u32, total: u32) -> Result<Self, QuizError> {
        if total == 0 {
            return Err(QuizError::NoQuestions);
        }
        let correct = correct.min(total);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (f64::from(correct) / f64::from(total) * 100.0).round() as u8;
        Ok(Self(percent))
    }

    /// Returns the underlying percentage value
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_perfect(self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for ScorePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
}

impl QuizQuestion {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyPrompt` for a blank prompt,
    /// `QuizError::NotEnoughOptions` for fewer than two options, and
    /// `QuizError::CorrectAnswerOutOfRange` when the answer index does not
    /// name an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
    ) -> Result<Self, QuizError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuizError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuizError::NotEnoughOptions(options.len()));
        }
        if correct_answer >= options.len() {
            return Err(QuizError::CorrectAnswerOutOfRange {
                index: correct_answer,
                options: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_answer,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    /// Whether `choice` names the correct option.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer
    }
}

//
// ─── QUIZ BANK ─────────────────────────────────────────────────────────────────
//

/// A named question set whose final score is recorded under `category`.
///
/// Scenario quizzes carry the owning scenario id; the standalone investment
/// quiz carries none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizBank {
    category: String,
    scenario: Option<ScenarioId>,
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    /// Creates a validated quiz bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyCategory` for a blank category and
    /// `QuizError::NoQuestions` for an empty question list.
    pub fn new(
        category: impl Into<String>,
        scenario: Option<ScenarioId>,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self, QuizError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(QuizError::EmptyCategory);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        Ok(Self {
            category,
            scenario,
            questions,
        })
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn scenario(&self) -> Option<ScenarioId> {
        self.scenario
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
