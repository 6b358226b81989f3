//! Pure Qloo REST API client.
//!
//! Covers the two endpoints the taste pipeline needs: entity search and
//! insights (taste-based recommendations).
//!
//! # Example
//!
//! ```rust,ignore
//! use qloo_client::{InsightsQuery, QlooClient};
//!
//! let client = QlooClient::new(api_key);
//! let insights = client
//!     .insights(&InsightsQuery::new().filter_type("urn:entity:artist").query("Jazz").take(3))
//!     .await?;
//! for entity in insights.entities() {
//!     println!("{}", entity["name"]);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{QlooError, Result};
pub use types::{InsightsQuery, InsightsResponse, SearchEntity, SearchResponse};

use std::time::Duration;

use serde::de::DeserializeOwned;

const DEFAULT_BASE_URL: &str = "https://hackathon.api.qloo.com";

#[derive(Clone)]
pub struct QlooClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for QlooClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QlooClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl QlooClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Taste-based insights for the given filter and seeds.
    pub async fn insights(&self, query: &InsightsQuery) -> Result<InsightsResponse> {
        let url = format!("{}/v2/insights", self.base_url);
        tracing::debug!(filter_type = ?query.filter_type, "Requesting Qloo insights");
        self.get_json(&url, &query.to_params()).await
    }

    /// Resolve free text to entities of the given types (e.g. `artist`).
    pub async fn search(&self, query: &str, types: &[&str]) -> Result<SearchResponse> {
        let url = format!("{}/search", self.base_url);
        let mut params = vec![("query", query.to_string())];
        if !types.is_empty() {
            params.push(("types", types.join(",")));
        }
        self.get_json(&url, &params).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let resp = self
            .client
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(QlooError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| QlooError::Parse(e.to_string()))
    }
}
