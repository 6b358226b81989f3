use axum::{extract::Extension, Json};

use crate::domains::recommendations::actions::chat_reply;
use crate::domains::recommendations::data::{ChatRequest, ChatResponse};
use crate::server::app::AppState;

/// `POST /api/chat-ai`
pub async fn chat_handler(
    Extension(state): Extension<AppState>,
    Json(body): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let result = chat_reply(
        body.message.unwrap_or_default(),
        body.preferences.unwrap_or_default(),
        &state.deps,
    )
    .await;
    Json(result.into())
}
