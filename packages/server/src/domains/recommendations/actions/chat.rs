use tracing::info;

use crate::domains::recommendations::models::{PreferenceSet, RecommendationResult};
use crate::domains::recommendations::normalizer::normalize;
use crate::kernel::{ServerDeps, TasteRequest};

/// Reply to one chat message, using the stored taste profile when the
/// client sends it.
pub async fn chat_reply(
    message: String,
    preferences: PreferenceSet,
    deps: &ServerDeps,
) -> RecommendationResult {
    let provider = deps.taste_provider.as_ref();
    info!(
        provider = provider.name(),
        message_len = message.len(),
        categories = preferences.len(),
        "Received chat request"
    );

    let request = TasteRequest::chat(message, preferences);
    let upstream = provider.recommend(&request).await;
    if let Err(e) = &upstream {
        tracing::warn!(provider = provider.name(), error = %e, "Chat upstream call failed");
    }

    let result = normalize(&request.preferences, request.message(), upstream);
    info!(
        count = result.recommendations.len(),
        fallback = result.fallback,
        "Chat recommendations ready"
    );
    result
}
