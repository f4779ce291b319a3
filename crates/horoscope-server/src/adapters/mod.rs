//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod clock;
pub mod memory_cache;
pub mod openai;

// Re-exports
pub use clock::SystemClock;
pub use memory_cache::InMemoryPredictionCache;
pub use openai::{OpenAiChatProvider, OpenAiModeration};
