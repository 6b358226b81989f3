use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    provider: String,
}

/// Health check endpoint
///
/// Upstream providers are not probed: an unreachable provider degrades to
/// fallback recommendations rather than making the service unhealthy.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            provider: state.deps.taste_provider.name().to_string(),
        }),
    )
}
