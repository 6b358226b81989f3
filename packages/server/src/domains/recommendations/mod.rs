pub mod actions;
pub mod data;
pub mod models;
pub mod normalizer;
pub mod prompts;

// Re-export commonly used types
pub use models::{
    PreferenceCategory, PreferenceSet, RawUpstreamItem, Recommendation, RecommendationResult,
    UpstreamError,
};
pub use normalizer::normalize;
