// TestDependencies - mock implementations for testing
//
// Provides a scripted taste provider that can be injected into ServerDeps.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseTasteProvider, ServerDeps, TasteRequest};
use crate::domains::recommendations::models::{RawUpstreamItem, UpstreamError};

// =============================================================================
// Mock Taste Provider
// =============================================================================

/// Scripted reply for one `recommend` call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Items(Vec<RawUpstreamItem>),
    NetworkError(String),
    StatusError(u16),
    ParseError(String),
}

impl MockReply {
    fn into_result(self) -> Result<Vec<RawUpstreamItem>, UpstreamError> {
        match self {
            MockReply::Items(items) => Ok(items),
            MockReply::NetworkError(msg) => Err(UpstreamError::Network(msg)),
            MockReply::StatusError(status) => Err(UpstreamError::Status {
                status,
                body: "mock upstream error".to_string(),
            }),
            MockReply::ParseError(msg) => Err(UpstreamError::Parse(msg)),
        }
    }
}

/// Replies are consumed in order; once exhausted every call returns an
/// empty item list.
#[derive(Clone, Default)]
pub struct MockTasteProvider {
    replies: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<TasteRequest>>>,
}

impl MockTasteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, items: Vec<RawUpstreamItem>) -> Self {
        self.replies.lock().unwrap().push(MockReply::Items(items));
        self
    }

    pub fn with_network_error(self) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockReply::NetworkError("connection refused".to_string()));
        self
    }

    pub fn with_reply(self, reply: MockReply) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    /// All requests received so far
    pub fn calls(&self) -> Vec<TasteRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseTasteProvider for MockTasteProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn recommend(&self, request: &TasteRequest) -> Result<Vec<RawUpstreamItem>, UpstreamError> {
        self.calls.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            Ok(Vec::new())
        } else {
            replies.remove(0).into_result()
        }
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock services bundled for injection into `build_app`.
#[derive(Clone, Default)]
pub struct TestDependencies {
    pub taste_provider: MockTasteProvider,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(provider: MockTasteProvider) -> Self {
        Self {
            taste_provider: provider,
        }
    }

    pub fn into_server_deps(self) -> ServerDeps {
        ServerDeps::new(Arc::new(self.taste_provider))
    }
}
