//! Service Ports
//!
//! Abstract interfaces for external services.

mod clock;
mod llm_provider;
mod moderation;

pub use clock::*;
pub use llm_provider::*;
pub use moderation::*;
