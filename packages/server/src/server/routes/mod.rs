// HTTP routes
pub mod chat;
pub mod health;
pub mod onboarding;
pub mod questionnaire;

pub use chat::*;
pub use health::*;
pub use onboarding::*;
pub use questionnaire::*;
