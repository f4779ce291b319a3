//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the cache and external model services.

pub(crate) mod ai_generator;
pub(crate) mod horoscope_service;

pub use ai_generator::AiGenerator;
pub use horoscope_service::{HoroscopeOutcome, HoroscopeService};
