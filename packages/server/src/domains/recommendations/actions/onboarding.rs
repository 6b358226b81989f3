use tracing::info;

use crate::domains::recommendations::models::{PreferenceSet, RecommendationResult};
use crate::domains::recommendations::normalizer::normalize;
use crate::kernel::{ServerDeps, TasteRequest};

/// Welcome batch after the questionnaire is submitted.
pub async fn process_onboarding(preferences: PreferenceSet, deps: &ServerDeps) -> RecommendationResult {
    let provider = deps.taste_provider.as_ref();
    info!(
        provider = provider.name(),
        categories = preferences.len(),
        "Processing onboarding preferences"
    );

    let request = TasteRequest::onboarding(preferences);
    let upstream = provider.recommend(&request).await;
    if let Err(e) = &upstream {
        tracing::warn!(provider = provider.name(), error = %e, "Onboarding upstream call failed");
    }

    let result = normalize(&request.preferences, "", upstream);
    info!(
        count = result.recommendations.len(),
        fallback = result.fallback,
        "Onboarding recommendations ready"
    );
    result
}
