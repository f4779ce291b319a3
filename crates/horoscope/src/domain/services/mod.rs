//! Domain Services
//!
//! Stateless domain logic shared by the server's application layer.
//! - sign_resolver: birth date -> zodiac sign
//! - templates: static French prediction pools
//! - prompt_builder: instruction text for the language model
//! - response_parser: model output -> validated PredictionSet

mod prompt_builder;
mod response_parser;
mod sign_resolver;
mod templates;

pub use prompt_builder::*;
pub use response_parser::*;
pub use sign_resolver::*;
pub use templates::*;
