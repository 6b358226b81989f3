//! Taste provider adapters: one per upstream vendor, each mapping the
//! vendor's raw JSON into `RawUpstreamItem`.

pub mod gemini;
pub mod openai;
pub mod qloo;
pub mod reply;

pub use gemini::GeminiTasteProvider;
pub use openai::OpenAiTasteProvider;
pub use qloo::QlooTasteProvider;
pub use reply::parse_llm_reply;
