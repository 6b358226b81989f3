use async_trait::async_trait;
use gemini_client::GeminiClient;

use super::reply::parse_llm_reply;
use crate::domains::recommendations::models::{RawUpstreamItem, UpstreamError};
use crate::domains::recommendations::prompts::{chat_prompt, onboarding_prompt, SYSTEM_PROMPT};
use crate::kernel::{BaseTasteProvider, TasteRequest};

/// Taste provider backed by Gemini `generateContent` with JSON output.
pub struct GeminiTasteProvider {
    client: GeminiClient,
}

impl GeminiTasteProvider {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BaseTasteProvider for GeminiTasteProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn recommend(&self, request: &TasteRequest) -> Result<Vec<RawUpstreamItem>, UpstreamError> {
        let prompt = match &request.message {
            Some(message) => chat_prompt(message, &request.preferences),
            None => onboarding_prompt(&request.preferences),
        };

        tracing::info!(model = %self.client.model(), chat = request.message.is_some(), "Calling Gemini");

        let text = self.client.generate_text(SYSTEM_PROMPT, &prompt, true).await?;
        parse_llm_reply(&text)
    }
}
