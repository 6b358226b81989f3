//! Request and response bodies for the recommendation endpoints.

use serde::{Deserialize, Serialize};

use super::models::{PreferenceCategory, PreferenceSet, Recommendation, RecommendationResult};

// Every field may be missing or `null`; neither is an error.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnboardingRequest {
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
}

/// Onboarding envelope: the text goes out as `message`.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingResponse {
    pub message: String,
    pub recommendations: Vec<Recommendation>,
}

impl From<RecommendationResult> for OnboardingResponse {
    fn from(result: RecommendationResult) -> Self {
        Self {
            message: result.message,
            recommendations: result.recommendations,
        }
    }
}

/// Chat envelope: the text goes out as `response`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub recommendations: Vec<Recommendation>,
}

impl From<RecommendationResult> for ChatResponse {
    fn from(result: RecommendationResult) -> Self {
        Self {
            response: result.message,
            recommendations: result.recommendations,
        }
    }
}

/// One onboarding step as the client renders it.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireStep {
    pub category: PreferenceCategory,
    pub title: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
}

impl From<PreferenceCategory> for QuestionnaireStep {
    fn from(category: PreferenceCategory) -> Self {
        Self {
            category,
            title: category.display_name(),
            question: category.question(),
            options: category.options(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub steps: Vec<QuestionnaireStep>,
}

impl QuestionnaireResponse {
    /// All five steps in questionnaire order.
    pub fn all() -> Self {
        Self {
            steps: PreferenceCategory::ALL.into_iter().map(Into::into).collect(),
        }
    }
}
