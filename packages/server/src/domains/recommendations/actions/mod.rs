//! Recommendation actions - entry-point business logic
//!
//! Called directly from the HTTP routes. Each action asks the configured
//! taste provider for raw items and normalizes whatever comes back; none of
//! them can fail.

pub mod chat;
pub mod onboarding;

pub use chat::chat_reply;
pub use onboarding::process_onboarding;
