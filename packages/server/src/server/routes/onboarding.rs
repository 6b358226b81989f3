use axum::{extract::Extension, Json};

use crate::domains::recommendations::actions::process_onboarding;
use crate::domains::recommendations::data::{OnboardingRequest, OnboardingResponse};
use crate::server::app::AppState;

/// `POST /api/process-onboarding`
///
/// Always answers 200 with a well-formed envelope once the body parses.
pub async fn onboarding_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<OnboardingRequest>,
) -> Json<OnboardingResponse> {
    let result = process_onboarding(body.preferences.unwrap_or_default(), &state.deps).await;
    Json(result.into())
}
