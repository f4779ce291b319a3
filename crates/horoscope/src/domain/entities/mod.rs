//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - BirthInput: Validated birth date and gender hint
//! - PredictionSet: Daily/weekly/monthly texts (+ AI tip)
//! - CacheKey: Fingerprint of a cacheable AI generation
//! - PromptConfig: Inputs of prompt construction

mod birth;
mod cache_key;
mod prediction;
mod prompt_config;

pub use birth::*;
pub use cache_key::*;
pub use prediction::*;
pub use prompt_config::*;
