use crate::model::content::{CardStyle, ContentError};
use crate::model::ids::LessonId;

/// One lesson in the curriculum: a meme-fronted text card with bullet
/// sections for principles, dos, don'ts, and facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonTopic {
    id: LessonId,
    title: String,
    description: String,
    meme_image: String,
    key_principles: Vec<String>,
    dos: Vec<String>,
    donts: Vec<String>,
    facts: Vec<String>,
    style: CardStyle,
}

impl LessonTopic {
    /// Creates a lesson topic.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        meme_image: impl Into<String>,
        key_principles: Vec<String>,
        dos: Vec<String>,
        donts: Vec<String>,
        facts: Vec<String>,
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
            meme_image: meme_image.into(),
            key_principles,
            dos,
            donts,
            facts,
            style,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
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

    /// Asset name of the header image, opaque to this crate.
    #[must_use]
    pub fn meme_image(&self) -> &str {
        &self.meme_image
    }

    #[must_use]
    pub fn key_principles(&self) -> &[String] {
        &self.key_principles
    }

    #[must_use]
    pub fn dos(&self) -> &[String] {
        &self.dos
    }

    #[must_use]
    pub fn donts(&self) -> &[String] {
        &self.donts
    }

    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    #[must_use]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_rejects_blank_title() {
        let err = LessonTopic::new(
            LessonId::new(1),
            "   ",
            "desc",
            "img",
            Vec::new(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
            CardStyle::new("star.fill", "blue", "purple"),
        )
        .unwrap_err();
        assert_eq!(err, ContentError::EmptyTitle);
    }

    #[test]
    fn lesson_keeps_sections() {
        let lesson = LessonTopic::new(
            LessonId::new(2),
            "Budgeting",
            "Money GPS",
            "drake_hotline_bling",
            vec!["Track spending".into()],
            vec!["Prioritize needs".into()],
            vec!["Ignore small buys".into()],
            vec!["Budgeters save more".into()],
            CardStyle::new("chart.pie.fill", "green", "blue"),
        )
        .unwrap();

        assert_eq!(lesson.title(), "Budgeting");
        assert_eq!(lesson.key_principles().len(), 1);
        assert_eq!(lesson.style().gradient.start, "green");
    }
}
