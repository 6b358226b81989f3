// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only. What to do with the items (fallback
// policy, coercion, capping) lives in domains/recommendations.
//
// Naming convention: Base* for trait names (e.g., BaseTasteProvider)

use async_trait::async_trait;

use crate::domains::recommendations::models::{PreferenceSet, RawUpstreamItem, UpstreamError};

// =============================================================================
// Taste Provider Trait (Infrastructure - upstream recommendation sources)
// =============================================================================

/// What the caller knows when asking a provider for recommendations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasteRequest {
    pub preferences: PreferenceSet,
    /// Free-text chat message; `None` for the onboarding batch
    pub message: Option<String>,
}

impl TasteRequest {
    pub fn onboarding(preferences: PreferenceSet) -> Self {
        Self {
            preferences,
            message: None,
        }
    }

    pub fn chat(message: impl Into<String>, preferences: PreferenceSet) -> Self {
        let message = message.into();
        Self {
            preferences,
            message: (!message.trim().is_empty()).then_some(message),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

#[async_trait]
pub trait BaseTasteProvider: Send + Sync {
    /// Short provider name for logs and the health endpoint
    fn name(&self) -> &'static str;

    /// Fetch raw items from upstream, mapped into the generic item shape.
    ///
    /// Errors mean the whole call failed; per-item garbage is returned as-is
    /// for the normalizer to discard.
    async fn recommend(&self, request: &TasteRequest) -> Result<Vec<RawUpstreamItem>, UpstreamError>;
}
