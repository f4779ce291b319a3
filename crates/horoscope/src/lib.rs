//! Horoscope Domain Library
//!
//! Core domain types and interfaces for the French horoscope service.
//!
//! # Architecture
//!
//! This crate follows the same Hexagonal Architecture split as the server:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (BirthInput, PredictionSet, CacheKey, PromptConfig)
//!   - `value_objects/`: Immutable value types (Sign, Style, Length, Gender)
//!   - `services/`: Sign resolution, templates, prompt building, response parsing
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Prediction cache interface
//!   - `services/`: LLM, moderation and clock interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use horoscope::domain::{resolve_sign, TemplateStore};
//! use horoscope::ports::{ChatCompletionProvider, PredictionCache};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_prompt, parse_completion, resolve_sign, BirthInput, CacheKey, DomainError, Gender,
    Length, PredictionSet, PromptConfig, Sign, SignTemplates, Style, TemplateStore,
};
pub use ports::{
    ChatCompletionProvider, ChatMessage, Clock, CompletionOptions, CompletionResponse,
    MessageRole, ModerationService, PredictionCache,
};
