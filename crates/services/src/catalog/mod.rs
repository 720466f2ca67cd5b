//! Static content catalog.
//!
//! Lessons, budget scenarios, investment topics, and quiz banks are read-only
//! configuration: loaded once at startup, validated through the core
//! constructors, and indexed by id. The builtin payload ships embedded in the
//! crate; callers may supply their own JSON with the same shape instead.

mod draft;

use std::collections::BTreeMap;
use tracing::debug;

use finlit_core::model::{
    BudgetScenario, InvestTopic, InvestTopicId, LessonId, LessonTopic, QuizBank, ScenarioId,
};

use crate::error::CatalogError;
use draft::CatalogDraft;

/// The content payload that ships with the app.
pub const BUILTIN_JSON: &str = include_str!("builtin.json");

/// Validated, id-indexed content. Immutable after loading.
#[derive(Debug, Clone)]
pub struct Catalog {
    lessons: BTreeMap<LessonId, LessonTopic>,
    scenarios: BTreeMap<ScenarioId, BudgetScenario>,
    invest_topics: BTreeMap<InvestTopicId, InvestTopic>,
    scenario_quizzes: BTreeMap<ScenarioId, QuizBank>,
    investment_quiz: QuizBank,
}

impl Catalog {
    /// Loads the builtin content payload.
    ///
    /// # Errors
    ///
    /// Propagates any `CatalogError`; the builtin payload is covered by
    /// tests, so this only fails if the embedded data is edited into an
    /// invalid state.
    pub fn load_builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Loads a catalog from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and the more specific
    /// variants for payloads that parse but fail validation.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogDraft = serde_json::from_str(payload)?;
        let catalog = parsed.validate()?;
        debug!(
            lessons = catalog.lessons.len(),
            scenarios = catalog.scenarios.len(),
            invest_topics = catalog.invest_topics.len(),
            scenario_quizzes = catalog.scenario_quizzes.len(),
            "content catalog loaded"
        );
        Ok(catalog)
    }

    pub(crate) fn from_parts(
        lessons: BTreeMap<LessonId, LessonTopic>,
        scenarios: BTreeMap<ScenarioId, BudgetScenario>,
        invest_topics: BTreeMap<InvestTopicId, InvestTopic>,
        scenario_quizzes: BTreeMap<ScenarioId, QuizBank>,
        investment_quiz: QuizBank,
    ) -> Self {
        Self {
            lessons,
            scenarios,
            invest_topics,
            scenario_quizzes,
            investment_quiz,
        }
    }

    // ─── Lookups ───────────────────────────────────────────────────────────

    /// Lessons in id order.
    pub fn lessons(&self) -> impl Iterator<Item = &LessonTopic> {
        self.lessons.values()
    }

    #[must_use]
    pub fn lesson(&self, id: LessonId) -> Option<&LessonTopic> {
        self.lessons.get(&id)
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Budget scenarios in id order.
    pub fn scenarios(&self) -> impl Iterator<Item = &BudgetScenario> {
        self.scenarios.values()
    }

    #[must_use]
    pub fn scenario(&self, id: ScenarioId) -> Option<&BudgetScenario> {
        self.scenarios.get(&id)
    }

    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Investment topics in id order.
    pub fn invest_topics(&self) -> impl Iterator<Item = &InvestTopic> {
        self.invest_topics.values()
    }

    #[must_use]
    pub fn invest_topic(&self, id: InvestTopicId) -> Option<&InvestTopic> {
        self.invest_topics.get(&id)
    }

    #[must_use]
    pub fn invest_topic_count(&self) -> usize {
        self.invest_topics.len()
    }

    /// The quiz attached to a scenario, if it has one.
    #[must_use]
    pub fn quiz_for_scenario(&self, id: ScenarioId) -> Option<&QuizBank> {
        self.scenario_quizzes.get(&id)
    }

    /// The standalone investment quiz. Presence is validated at load time.
    #[must_use]
    pub fn investment_quiz(&self) -> &QuizBank {
        &self.investment_quiz
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_payload_loads() {
        let catalog = Catalog::load_builtin().unwrap();
        assert_eq!(catalog.lesson_count(), 7);
        assert_eq!(catalog.scenario_count(), 10);
        assert_eq!(catalog.invest_topic_count(), 5);
    }

    #[test]
    fn builtin_lessons_are_in_curriculum_order() {
        let catalog = Catalog::load_builtin().unwrap();
        let first = catalog.lessons().next().unwrap();
        assert_eq!(first.title(), "Welcome to the World of Finance!");
        assert_eq!(first.style().icon, "star.fill");

        let budgeting = catalog.lesson(LessonId::new(2)).unwrap();
        assert_eq!(budgeting.meme_image(), "drake_hotline_bling");
        assert_eq!(budgeting.style().gradient.start, "green");
    }

    #[test]
    fn builtin_scenarios_carry_plan_numbers() {
        let catalog = Catalog::load_builtin().unwrap();
        let console = catalog.scenario(ScenarioId::new(1)).unwrap();
        assert_eq!(console.title(), "Gaming Console Goal");
        assert_eq!(console.plan().target_amount(), 300);
        assert_eq!(console.plan().time_frame(), "6 months");
        assert_eq!(console.plan().monthly_saving(), "$50");
        assert_eq!(console.style().icon, "gamecontroller.fill");

        let snacks = catalog.scenario(ScenarioId::new(10)).unwrap();
        assert_eq!(snacks.title(), "Daily Snack Budget");
        assert_eq!(snacks.plan().target_amount(), 42);
        assert_eq!(snacks.plan().time_frame(), "2 weeks");
    }

    #[test]
    fn builtin_quizzes_cover_three_scenarios() {
        let catalog = Catalog::load_builtin().unwrap();
        for id in 1..=3 {
            let bank = catalog.quiz_for_scenario(ScenarioId::new(id)).unwrap();
            assert_eq!(bank.category(), "Budget");
            assert_eq!(bank.len(), 3);
        }
        assert!(catalog.quiz_for_scenario(ScenarioId::new(4)).is_none());
    }

    #[test]
    fn builtin_investment_quiz_has_five_questions() {
        let catalog = Catalog::load_builtin().unwrap();
        let quiz = catalog.investment_quiz();
        assert_eq!(quiz.category(), "Investment");
        assert_eq!(quiz.len(), 5);
        assert_eq!(quiz.scenario(), None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn duplicate_scenario_ids_are_rejected() {
        let payload = r#"{
            "lessons": [],
            "scenarios": [
                {"id": 1, "title": "A", "description": "", "key_points": [], "activity": "",
                 "target_amount": 10, "time_frame": "1 week", "monthly_saving": "$10",
                 "style": {"icon": "i", "gradient": ["a", "b"]}},
                {"id": 1, "title": "B", "description": "", "key_points": [], "activity": "",
                 "target_amount": 10, "time_frame": "1 week", "monthly_saving": "$10",
                 "style": {"icon": "i", "gradient": ["a", "b"]}}
            ],
            "invest_topics": [],
            "quizzes": [
                {"category": "Investment", "questions": [
                    {"prompt": "q", "options": ["a", "b"], "correct_answer": 0}
                ]}
            ]
        }"#;
        let err = Catalog::from_json(payload).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateScenario(id) if id == ScenarioId::new(1)
        ));
    }

    #[test]
    fn quiz_for_unknown_scenario_is_rejected() {
        let payload = r#"{
            "lessons": [],
            "scenarios": [],
            "invest_topics": [],
            "quizzes": [
                {"category": "Budget", "scenario": 9, "questions": [
                    {"prompt": "q", "options": ["a", "b"], "correct_answer": 0}
                ]},
                {"category": "Investment", "questions": [
                    {"prompt": "q", "options": ["a", "b"], "correct_answer": 0}
                ]}
            ]
        }"#;
        let err = Catalog::from_json(payload).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownQuizScenario(id) if id == ScenarioId::new(9)
        ));
    }

    #[test]
    fn missing_investment_quiz_is_rejected() {
        let payload = r#"{
            "lessons": [],
            "scenarios": [],
            "invest_topics": [],
            "quizzes": []
        }"#;
        let err = Catalog::from_json(payload).unwrap_err();
        assert!(matches!(err, CatalogError::MissingInvestmentQuiz));
    }

    #[test]
    fn out_of_range_answer_index_is_rejected() {
        let payload = r#"{
            "lessons": [],
            "scenarios": [],
            "invest_topics": [],
            "quizzes": [
                {"category": "Investment", "questions": [
                    {"prompt": "q", "options": ["a", "b"], "correct_answer": 7}
                ]}
            ]
        }"#;
        let err = Catalog::from_json(payload).unwrap_err();
        assert!(matches!(err, CatalogError::Quiz(_)));
    }

    #[test]
    fn second_standalone_quiz_is_rejected() {
        let payload = r#"{
            "lessons": [],
            "scenarios": [],
            "invest_topics": [],
            "quizzes": [
                {"category": "Investment", "questions": [
                    {"prompt": "q", "options": ["a", "b"], "correct_answer": 0}
                ]},
                {"category": "Trivia", "questions": [
                    {"prompt": "q", "options": ["a", "b"], "correct_answer": 0}
                ]}
            ]
        }"#;
        let err = Catalog::from_json(payload).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ExtraStandaloneQuiz(category) if category == "Trivia"
        ));
    }
}
