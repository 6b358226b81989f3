use serde::Deserialize;
use serde_json::Value;

/// Parameters for `GET /v2/insights`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightsQuery {
    /// Entity type URN, e.g. `urn:entity:artist`
    pub filter_type: Option<String>,
    /// Free-text seed
    pub query: Option<String>,
    /// Entity IDs used as interest signals
    pub signal_entities: Vec<String>,
    pub take: Option<u32>,
}

impl InsightsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_type(mut self, urn: impl Into<String>) -> Self {
        self.filter_type = Some(urn.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn signal_entity(mut self, id: impl Into<String>) -> Self {
        self.signal_entities.push(id.into());
        self
    }

    pub fn take(mut self, take: u32) -> Self {
        self.take = Some(take);
        self
    }

    /// Query-string pairs in the order the API documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(filter_type) = &self.filter_type {
            params.push(("filter.type", filter_type.clone()));
        }
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        if !self.signal_entities.is_empty() {
            params.push(("signal.interests.entities", self.signal_entities.join(",")));
        }
        if let Some(take) = self.take {
            params.push(("take", take.to_string()));
        }
        params
    }
}

/// Insights response body.
///
/// Entities are kept as raw JSON: their fields vary by entity type and a
/// single odd entity must not fail the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightsResponse {
    #[serde(default)]
    pub results: Value,
}

impl InsightsResponse {
    /// Entities from either `results: [...]` or `results: { entities: [...] }`.
    pub fn entities(&self) -> &[Value] {
        match &self.results {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("entities") {
                Some(Value::Array(items)) => items,
                _ => &[],
            },
            _ => &[],
        }
    }
}

/// Search response body (`GET /search`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, alias = "entities")]
    pub results: Vec<SearchEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchEntity {
    #[serde(alias = "id")]
    pub entity_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub entity_type: Option<String>,
}
