use serde::Serialize;

/// One recommendation card.
///
/// Only the normalizer builds these, so every field is always populated and
/// `confidence` is within `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub category: String,
    pub description: String,
    pub confidence: f64,
}

impl Recommendation {
    pub(crate) fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            description: description.into(),
            confidence,
        }
    }

    /// The card shown when nothing usable came back.
    pub fn fallback() -> Self {
        Self::new(
            "Personalized Recommendation",
            "Suggestion",
            "Based on your unique taste profile",
            0.9,
        )
    }
}

/// Normalizer output: a message plus 1 to 5 cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub message: String,
    pub recommendations: Vec<Recommendation>,
    /// Whether the fallback card was substituted
    #[serde(skip)]
    pub fallback: bool,
}
