/// Two color tokens for a card background, drawn start → end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub start: String,
    pub end: String,
}

/// Presentation hints carried with a content record.
///
/// Icon symbols and color tokens are opaque to this crate and passed through
/// to presentation unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    pub icon: String,
    pub gradient: Gradient,
}

impl CardStyle {
    #[must_use]
    pub fn new(
        icon: impl Into<String>,
        gradient_start: impl Into<String>,
        gradient_end: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            gradient: Gradient {
                start: gradient_start.into(),
                end: gradient_end.into(),
            },
        }
    }
}
