use async_trait::async_trait;
use futures::future::join_all;
use qloo_client::{InsightsQuery, QlooClient};

use crate::domains::recommendations::models::{
    PreferenceCategory, RawUpstreamItem, UpstreamError,
};
use crate::kernel::{BaseTasteProvider, TasteRequest};

/// Taste provider backed by Qloo insights.
///
/// Issues one insights query per preference category, concurrently. For a
/// chat message each category first looks the message up as an entity and
/// passes the match as an interest signal. A category whose query fails is
/// dropped; the call only fails when every query did.
pub struct QlooTasteProvider {
    client: QlooClient,
    max_categories: usize,
    take: u32,
}

impl QlooTasteProvider {
    pub fn new(client: QlooClient) -> Self {
        Self {
            client,
            max_categories: PreferenceCategory::ALL.len(),
            take: 3,
        }
    }

    /// Query at most `max` categories per request.
    pub fn with_max_categories(mut self, max: usize) -> Self {
        self.max_categories = max;
        self
    }

    /// Results requested per insights query.
    pub fn with_take(mut self, take: u32) -> Self {
        self.take = take;
        self
    }

    fn category_queries(&self, request: &TasteRequest) -> Vec<(PreferenceCategory, InsightsQuery)> {
        request
            .preferences
            .iter()
            .take(self.max_categories)
            .filter_map(|(category, _)| {
                let seed = request
                    .message
                    .as_deref()
                    .or_else(|| request.preferences.first_value(category))?;
                Some((
                    category,
                    InsightsQuery::new()
                        .filter_type(category.entity_type())
                        .query(seed)
                        .take(self.take),
                ))
            })
            .collect()
    }

    /// Resolve a chat message to an entity of the category's type, used as
    /// an interest signal. A failed lookup only loses the signal.
    async fn signal_for(&self, category: PreferenceCategory, message: &str) -> Option<String> {
        match self.client.search(message, &[category.entity_type()]).await {
            Ok(found) => found.results.into_iter().next().map(|entity| entity.entity_id),
            Err(e) => {
                tracing::debug!(provider = "qloo", category = %category, error = %e, "Entity lookup failed");
                None
            }
        }
    }

    async fn query_category(
        &self,
        category: PreferenceCategory,
        mut query: InsightsQuery,
        message: Option<&str>,
    ) -> Result<Vec<RawUpstreamItem>, UpstreamError> {
        if let Some(message) = message {
            if let Some(entity_id) = self.signal_for(category, message).await {
                query = query.signal_entity(entity_id);
            }
        }

        let response = self.client.insights(&query).await.map_err(|e| {
            tracing::warn!(provider = "qloo", category = %category, error = %e, "Insights query failed");
            UpstreamError::from(e)
        })?;

        Ok(response
            .entities()
            .iter()
            .map(|entity| RawUpstreamItem::from_json(entity).with_source(category))
            .collect())
    }
}

#[async_trait]
impl BaseTasteProvider for QlooTasteProvider {
    fn name(&self) -> &'static str {
        "qloo"
    }

    async fn recommend(&self, request: &TasteRequest) -> Result<Vec<RawUpstreamItem>, UpstreamError> {
        let queries = self.category_queries(request);

        if queries.is_empty() {
            let Some(message) = request.message.as_deref() else {
                return Ok(Vec::new());
            };
            let response = self
                .client
                .insights(&InsightsQuery::new().query(message).take(self.take))
                .await?;
            return Ok(response.entities().iter().map(RawUpstreamItem::from_json).collect());
        }

        let outcomes = join_all(
            queries
                .into_iter()
                .map(|(category, query)| {
                    self.query_category(category, query, request.message.as_deref())
                }),
        )
        .await;

        let mut batches = Vec::new();
        let mut last_error = None;
        for outcome in outcomes {
            match outcome {
                Ok(items) => batches.push(items),
                Err(e) => last_error = Some(e),
            }
        }

        match (batches.is_empty(), last_error) {
            (true, Some(err)) => Err(err),
            _ => Ok(interleave(batches)),
        }
    }
}

/// Round-robin merge so every category gets a card before any gets a second.
fn interleave(batches: Vec<Vec<RawUpstreamItem>>) -> Vec<RawUpstreamItem> {
    let mut iters: Vec<_> = batches.into_iter().map(Vec::into_iter).collect();
    let mut merged = Vec::new();
    loop {
        let before = merged.len();
        for iter in iters.iter_mut() {
            if let Some(item) = iter.next() {
                merged.push(item);
            }
        }
        if merged.len() == before {
            return merged;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::recommendations::models::PreferenceSet;

    #[test]
    fn onboarding_seeds_each_category_with_first_tag() {
        let provider = QlooTasteProvider::new(QlooClient::new("key"));
        let prefs = PreferenceSet::new()
            .with(PreferenceCategory::Music, ["Jazz", "Blues"])
            .with(PreferenceCategory::Food, ["Thai"]);

        let queries = provider.category_queries(&TasteRequest::onboarding(prefs));

        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].0, PreferenceCategory::Music);
        assert_eq!(queries[0].1.filter_type.as_deref(), Some("urn:entity:artist"));
        assert_eq!(queries[0].1.query.as_deref(), Some("Jazz"));
        assert_eq!(queries[1].1.filter_type.as_deref(), Some("urn:entity:place"));
    }

    #[test]
    fn take_is_applied_to_every_query() {
        let provider = QlooTasteProvider::new(QlooClient::new("key")).with_take(7);
        let prefs = PreferenceSet::new()
            .with(PreferenceCategory::Movies, ["Drama"])
            .with(PreferenceCategory::Fashion, ["Vintage"]);

        let queries = provider.category_queries(&TasteRequest::onboarding(prefs));

        assert!(queries.iter().all(|(_, query)| query.take == Some(7)));
    }

    #[test]
    fn chat_seeds_with_message_and_respects_category_cap() {
        let provider = QlooTasteProvider::new(QlooClient::new("key")).with_max_categories(1);
        let prefs = PreferenceSet::new()
            .with(PreferenceCategory::Movies, ["Drama"])
            .with(PreferenceCategory::Travel, ["Museums"]);

        let queries = provider.category_queries(&TasteRequest::chat("moody noir", prefs));

        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].1.query.as_deref(), Some("moody noir"));
    }

    #[test]
    fn interleave_round_robins() {
        let batch = |names: &[&str]| -> Vec<RawUpstreamItem> {
            names.iter().map(|n| RawUpstreamItem::named(*n)).collect()
        };
        let merged = interleave(vec![batch(&["a1", "a2", "a3"]), batch(&[]), batch(&["c1"])]);

        let names: Vec<_> = merged.iter().filter_map(|i| i.name.as_deref()).collect();
        assert_eq!(names, vec!["a1", "c1", "a2", "a3"]);
    }

    #[tokio::test]
    async fn no_preferences_and_no_message_makes_no_calls() {
        let provider = QlooTasteProvider::new(QlooClient::new("key").with_base_url("http://127.0.0.1:1"));
        let items = provider.recommend(&TasteRequest::default()).await.unwrap();
        assert!(items.is_empty());
    }
}
