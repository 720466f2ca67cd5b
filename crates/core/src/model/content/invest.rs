use crate::model::content::{CardStyle, ContentError};
use crate::model::ids::InvestTopicId;

/// One expandable card on the investing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestTopic {
    id: InvestTopicId,
    title: String,
    content: String,
    style: CardStyle,
}

impl InvestTopic {
    /// Creates an investment topic.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` if the title is blank.
    pub fn new(
        id: InvestTopicId,
        title: impl Into<String>,
        content: impl Into<String>,
        style: CardStyle,
    ) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            content: content.into(),
            style,
        })
    }

    #[must_use]
    pub fn id(&self) -> InvestTopicId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text; may contain newlines.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn style(&self) -> &CardStyle {
        &self.style
    }
}
