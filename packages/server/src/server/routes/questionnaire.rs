use axum::Json;

use crate::domains::recommendations::data::QuestionnaireResponse;

/// `GET /api/questionnaire`: the onboarding steps and their selectable tags.
pub async fn questionnaire_handler() -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse::all())
}
