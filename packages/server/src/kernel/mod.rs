//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod providers;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use providers::{GeminiTasteProvider, OpenAiTasteProvider, QlooTasteProvider};
pub use test_dependencies::{MockReply, MockTasteProvider, TestDependencies};
pub use traits::*;
