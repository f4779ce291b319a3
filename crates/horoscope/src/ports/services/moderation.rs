//! Moderation Service Port
//!
//! Content-safety check applied to model output.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// Service interface for content moderation
#[async_trait]
pub trait ModerationService: Send + Sync {
    /// Whether the text is flagged as unsafe
    async fn is_flagged(&self, text: &str) -> Result<bool, DomainError>;
}
