//! Server dependencies (using traits for testability)
//!
//! The one external service, the taste provider, sits behind
//! `BaseTasteProvider` so tests can swap in `MockTasteProvider`.

use std::sync::Arc;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use openai_client::OpenAIClient;
use qloo_client::QlooClient;

use crate::config::{Config, ProviderConfig};
use crate::kernel::providers::{GeminiTasteProvider, OpenAiTasteProvider, QlooTasteProvider};
use crate::kernel::BaseTasteProvider;

/// Server dependencies accessible to request handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub taste_provider: Arc<dyn BaseTasteProvider>,
}

impl ServerDeps {
    pub fn new(taste_provider: Arc<dyn BaseTasteProvider>) -> Self {
        Self { taste_provider }
    }

    /// Build the configured provider with its API key and timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = config.upstream_timeout;

        let taste_provider: Arc<dyn BaseTasteProvider> = match &config.provider {
            ProviderConfig::OpenAi { api_key, model } => {
                let client = OpenAIClient::new(api_key.clone())
                    .with_timeout(timeout)
                    .context("Failed to create OpenAI client")?;
                Arc::new(OpenAiTasteProvider::new(client, model.clone()))
            }
            ProviderConfig::Gemini { api_key, model } => {
                let client = GeminiClient::new(api_key.clone())
                    .with_model(model.clone())
                    .with_timeout(timeout)
                    .context("Failed to create Gemini client")?;
                Arc::new(GeminiTasteProvider::new(client))
            }
            ProviderConfig::Qloo {
                api_key,
                base_url,
                take,
                max_categories,
            } => {
                let client = QlooClient::new(api_key.clone())
                    .with_base_url(base_url.clone())
                    .with_timeout(timeout)
                    .context("Failed to create Qloo client")?;
                Arc::new(
                    QlooTasteProvider::new(client)
                        .with_take(*take)
                        .with_max_categories(*max_categories),
                )
            }
        };

        tracing::info!(provider = taste_provider.name(), "Taste provider configured");

        Ok(Self::new(taste_provider))
    }
}
