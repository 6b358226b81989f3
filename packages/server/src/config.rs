use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;

/// Which upstream produces recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
    Qloo,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            "qloo" => Ok(ProviderKind::Qloo),
            other => bail!("TASTE_PROVIDER must be one of openai, gemini, qloo (got {:?})", other),
        }
    }
}

/// Credentials and settings for the selected provider.
#[derive(Debug, Clone)]
pub enum ProviderConfig {
    OpenAi { api_key: String, model: String },
    Gemini { api_key: String, model: String },
    Qloo {
        api_key: String,
        base_url: String,
        /// Results requested per insights query
        take: u32,
        /// Categories queried per request
        max_categories: usize,
    },
}

impl ProviderConfig {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderConfig::OpenAi { .. } => ProviderKind::OpenAi,
            ProviderConfig::Gemini { .. } => ProviderKind::Gemini,
            ProviderConfig::Qloo { .. } => ProviderKind::Qloo,
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider: ProviderConfig,
    pub upstream_timeout: Duration,
    /// Empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str, provider: &str| {
            get(key).with_context(|| format!("{} must be set when TASTE_PROVIDER={}", key, provider))
        };

        let kind: ProviderKind = get("TASTE_PROVIDER")
            .unwrap_or_else(|| "openai".to_string())
            .parse()?;

        let provider = match kind {
            ProviderKind::OpenAi => ProviderConfig::OpenAi {
                api_key: require("OPENAI_API_KEY", "openai")?,
                model: get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o".to_string()),
            },
            ProviderKind::Gemini => ProviderConfig::Gemini {
                api_key: require("GEMINI_API_KEY", "gemini")?,
                model: get("GEMINI_MODEL").unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            },
            ProviderKind::Qloo => ProviderConfig::Qloo {
                api_key: require("QLOO_API_KEY", "qloo")?,
                base_url: get("QLOO_BASE_URL")
                    .unwrap_or_else(|| "https://hackathon.api.qloo.com".to_string()),
                take: get("QLOO_TAKE")
                    .unwrap_or_else(|| "3".to_string())
                    .parse()
                    .context("QLOO_TAKE must be a whole number")?,
                max_categories: get("QLOO_MAX_CATEGORIES")
                    .unwrap_or_else(|| "5".to_string())
                    .parse()
                    .context("QLOO_MAX_CATEGORIES must be a whole number")?,
            },
        };

        let upstream_timeout_secs: u64 = get("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            provider,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            allowed_origins: get("ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty() && o != "*")
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}
