//! Serde mirror of the catalog payload.
//!
//! Drafts deserialize the raw JSON and are turned into validated core types
//! by [`CatalogDraft::validate`]; nothing outside the catalog ever sees them.

use serde::Deserialize;
use std::collections::BTreeMap;

use finlit_core::model::{
    BudgetScenario, CardStyle, InvestTopic, InvestTopicId, LessonId, LessonTopic, QuizBank,
    QuizQuestion, SavingsPlan, ScenarioId,
};

use super::Catalog;
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
pub(super) struct CatalogDraft {
    lessons: Vec<LessonDraft>,
    scenarios: Vec<ScenarioDraft>,
    invest_topics: Vec<InvestTopicDraft>,
    quizzes: Vec<QuizBankDraft>,
}

#[derive(Debug, Deserialize)]
struct StyleDraft {
    icon: String,
    gradient: [String; 2],
}

impl StyleDraft {
    fn into_style(self) -> CardStyle {
        let [start, end] = self.gradient;
        CardStyle::new(self.icon, start, end)
    }
}

#[derive(Debug, Deserialize)]
struct LessonDraft {
    id: u64,
    title: String,
    description: String,
    meme_image: String,
    key_principles: Vec<String>,
    dos: Vec<String>,
    donts: Vec<String>,
    facts: Vec<String>,
    style: StyleDraft,
}

#[derive(Debug, Deserialize)]
struct ScenarioDraft {
    id: u64,
    title: String,
    description: String,
    key_points: Vec<String>,
    activity: String,
    target_amount: u32,
    time_frame: String,
    monthly_saving: String,
    style: StyleDraft,
}

#[derive(Debug, Deserialize)]
struct InvestTopicDraft {
    id: u64,
    title: String,
    content: String,
    style: StyleDraft,
}

#[derive(Debug, Deserialize)]
struct QuizBankDraft {
    category: String,
    #[serde(default)]
    scenario: Option<u64>,
    questions: Vec<QuestionDraft>,
}

#[derive(Debug, Deserialize)]
struct QuestionDraft {
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
}

impl CatalogDraft {
    pub(super) fn validate(self) -> Result<Catalog, CatalogError> {
        let mut lessons = BTreeMap::new();
        for draft in self.lessons {
            let id = LessonId::new(draft.id);
            let lesson = LessonTopic::new(
                id,
                draft.title,
                draft.description,
                draft.meme_image,
                draft.key_principles,
                draft.dos,
                draft.donts,
                draft.facts,
                draft.style.into_style(),
            )?;
            if lessons.insert(id, lesson).is_some() {
                return Err(CatalogError::DuplicateLesson(id));
            }
        }

        let mut scenarios = BTreeMap::new();
        for draft in self.scenarios {
            let id = ScenarioId::new(draft.id);
            let plan = SavingsPlan::new(draft.target_amount, draft.time_frame, draft.monthly_saving)?;
            let scenario = BudgetScenario::new(
                id,
                draft.title,
                draft.description,
                draft.key_points,
                draft.activity,
                plan,
                draft.style.into_style(),
            )?;
            if scenarios.insert(id, scenario).is_some() {
                return Err(CatalogError::DuplicateScenario(id));
            }
        }

        let mut invest_topics = BTreeMap::new();
        for draft in self.invest_topics {
            let id = InvestTopicId::new(draft.id);
            let topic = InvestTopic::new(id, draft.title, draft.content, draft.style.into_style())?;
            if invest_topics.insert(id, topic).is_some() {
                return Err(CatalogError::DuplicateInvestTopic(id));
            }
        }

        let mut scenario_quizzes = BTreeMap::new();
        let mut investment_quiz = None;
        for draft in self.quizzes {
            let scenario = draft.scenario.map(ScenarioId::new);
            let questions = draft
                .questions
                .into_iter()
                .map(|q| QuizQuestion::new(q.prompt, q.options, q.correct_answer))
                .collect::<Result<Vec<_>, _>>()?;
            let bank = QuizBank::new(draft.category, scenario, questions)?;

            match scenario {
                Some(id) => {
                    if !scenarios.contains_key(&id) {
                        return Err(CatalogError::UnknownQuizScenario(id));
                    }
                    if scenario_quizzes.insert(id, bank).is_some() {
                        return Err(CatalogError::DuplicateScenarioQuiz(id));
                    }
                }
                // The only standalone quiz is the investment quiz.
                None if bank.category() == "Investment" && investment_quiz.is_none() => {
                    investment_quiz = Some(bank);
                }
                None => {
                    return Err(CatalogError::ExtraStandaloneQuiz(
                        bank.category().to_owned(),
                    ));
                }
            }
        }

        let investment_quiz = investment_quiz.ok_or(CatalogError::MissingInvestmentQuiz)?;

        Ok(Catalog::from_parts(
            lessons,
            scenarios,
            invest_topics,
            scenario_quizzes,
            investment_quiz,
        ))
    }
}
