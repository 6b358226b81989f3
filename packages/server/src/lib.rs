// Vibora - API Core
//
// This crate turns questionnaire preferences and chat messages into
// recommendation cards, relaying to a configurable taste provider (OpenAI,
// Gemini, or Qloo) and normalizing whatever comes back.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
