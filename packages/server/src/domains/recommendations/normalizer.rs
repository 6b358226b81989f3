//! Turns whatever an upstream provider returned into a stable recommendation
//! contract.
//!
//! `normalize` is a pure function. It never fails: an upstream error, an empty
//! reply and a reply made only of garbage all degrade to the single fallback
//! card, so the chat UI never shows a raw error.

use super::models::{
    PreferenceSet, RawUpstreamItem, Recommendation, RecommendationResult, UpstreamError,
};

/// Upper bound on cards returned to the client.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Confidence used when upstream gives no usable score.
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Category used when neither upstream nor the preferences name one.
pub const DEFAULT_CATEGORY: &str = "suggestion";

pub const FALLBACK_MESSAGE: &str =
    "Sorry, I couldn't find personalized recommendations right now. Here's a pick to get you started while I learn more about your taste.";

/// Normalize one upstream outcome into a `RecommendationResult`.
pub fn normalize(
    preferences: &PreferenceSet,
    user_message: &str,
    upstream: Result<Vec<RawUpstreamItem>, UpstreamError>,
) -> RecommendationResult {
    let items = upstream.unwrap_or_default();

    let mut recommendations: Vec<Recommendation> = items
        .into_iter()
        .filter_map(|item| coerce(item, preferences))
        .take(MAX_RECOMMENDATIONS)
        .collect();

    let fallback = recommendations.is_empty();
    if fallback {
        recommendations.push(Recommendation::fallback());
    }

    let message = if fallback {
        FALLBACK_MESSAGE.to_string()
    } else {
        acknowledgment(preferences, user_message)
    };

    RecommendationResult {
        message,
        recommendations,
        fallback,
    }
}

/// Coerce a raw item, or `None` when it has no usable title.
fn coerce(item: RawUpstreamItem, preferences: &PreferenceSet) -> Option<Recommendation> {
    let title = [item.name.as_deref(), item.title.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())?
        .to_string();

    let category = item
        .kind
        .as_deref()
        .and_then(category_from_kind)
        .or_else(|| item.source_category.map(|c| c.as_str().to_string()))
        .or_else(|| preferences.first_category().map(|c| c.as_str().to_string()))
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let description = item
        .description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Based on your {} preferences", category));

    Some(Recommendation::new(
        title,
        category,
        description,
        normalize_confidence(item.score),
    ))
}

/// `urn:entity:movie` -> `movie`; blank segments count as absent.
fn category_from_kind(kind: &str) -> Option<String> {
    let last = kind.rsplit(':').next().unwrap_or(kind).trim();
    (!last.is_empty()).then(|| last.to_string())
}

/// Clamp finite scores into `[0, 1]`; missing or non-finite scores get the default.
pub fn normalize_confidence(score: Option<f64>) -> f64 {
    match score {
        Some(value) if value.is_finite() => value.clamp(0.0, 1.0),
        _ => DEFAULT_CONFIDENCE,
    }
}

fn acknowledgment(preferences: &PreferenceSet, user_message: &str) -> String {
    let user_message = user_message.trim();
    if !user_message.is_empty() {
        return format!(
            "Based on your taste, here are some tailored suggestions for \"{}\".",
            user_message
        );
    }

    let categories: Vec<&str> = preferences.categories().map(|c| c.as_str()).collect();
    if categories.is_empty() {
        "Here are some curated suggestions for you!".to_string()
    } else {
        format!(
            "Awesome! I understand your preferences in {}. Here are some curated suggestions for you!",
            categories.join(", ")
        )
    }
}
