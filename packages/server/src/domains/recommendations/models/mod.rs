pub mod preference;
pub mod raw_item;
pub mod recommendation;
pub mod upstream_error;

pub use preference::{PreferenceCategory, PreferenceSet};
pub use raw_item::RawUpstreamItem;
pub use recommendation::{Recommendation, RecommendationResult};
pub use upstream_error::UpstreamError;
