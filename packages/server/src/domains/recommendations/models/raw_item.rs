use serde_json::Value;

use super::PreferenceCategory;

/// Untrusted record from an upstream provider.
///
/// Nothing here is validated; the normalizer decides what survives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawUpstreamItem {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Affinity or confidence as reported upstream, any range
    pub score: Option<f64>,
    /// `type` or `category` as reported upstream, possibly a URN
    pub kind: Option<String>,
    /// Preference category whose query produced this item
    pub source_category: Option<PreferenceCategory>,
}

const SCORE_FIELDS: [&str; 4] = ["affinity_score", "affinity", "confidence", "score"];

impl RawUpstreamItem {
    /// Pull the known fields out of arbitrary provider JSON.
    ///
    /// A field holding the wrong JSON type counts as missing.
    pub fn from_json(value: &Value) -> Self {
        let description = string_field(value, "description").or_else(|| {
            value
                .get("properties")
                .and_then(|props| string_field(props, "description"))
        });

        let score = SCORE_FIELDS
            .iter()
            .find_map(|field| value.get(*field).and_then(Value::as_f64))
            .or_else(|| {
                value
                    .get("query")
                    .and_then(|q| q.get("affinity"))
                    .and_then(Value::as_f64)
            });

        Self {
            name: string_field(value, "name"),
            title: string_field(value, "title"),
            description,
            score,
            kind: string_field(value, "type").or_else(|| string_field(value, "category")),
            source_category: None,
        }
    }

    pub fn with_source(mut self, category: PreferenceCategory) -> Self {
        self.source_category = Some(category);
        self
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}
