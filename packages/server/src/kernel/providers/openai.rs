use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::reply::parse_llm_reply;
use crate::domains::recommendations::models::{RawUpstreamItem, UpstreamError};
use crate::domains::recommendations::prompts::{chat_prompt, onboarding_prompt, SYSTEM_PROMPT};
use crate::kernel::{BaseTasteProvider, TasteRequest};

/// Taste provider backed by OpenAI chat completions in JSON mode.
pub struct OpenAiTasteProvider {
    client: OpenAIClient,
    model: String,
}

impl OpenAiTasteProvider {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    fn build_request(&self, request: &TasteRequest) -> ChatRequest {
        let prompt = match &request.message {
            Some(message) => chat_prompt(message, &request.preferences),
            None => onboarding_prompt(&request.preferences),
        };

        ChatRequest::new(&self.model)
            .message(Message::system(SYSTEM_PROMPT))
            .message(Message::user(prompt))
            .temperature(0.8)
            .max_tokens(1024)
            .json_object()
    }
}

#[async_trait]
impl BaseTasteProvider for OpenAiTasteProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn recommend(&self, request: &TasteRequest) -> Result<Vec<RawUpstreamItem>, UpstreamError> {
        tracing::info!(model = %self.model, chat = request.message.is_some(), "Calling OpenAI");

        let response = self.client.chat_completion(self.build_request(request)).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(total_tokens = usage.total_tokens, "OpenAI usage");
        }

        parse_llm_reply(&response.content)
    }
}
