//! AI Generator - Model-written predictions with cache, retry and moderation
//!
//! Per call:
//! 1. cache lookup on (sign, style, length, UTC day)
//! 2. no provider configured -> unavailable, no network
//! 3. up to [`MAX_ATTEMPTS`] completions; the retry appends a strict
//!    "JSON only" suffix. Empty text, transport errors and invalid output
//!    move on to the next attempt.
//! 4. a moderation flag on the raw text or on the validated fields is
//!    terminal
//! 5. validated, trimmed predictions are cached and returned
//!
//! Nothing unvalidated or flagged is ever cached, and no error reaches the
//! caller beyond [`AiUnavailable`].

use std::sync::Arc;
use std::time::Duration;

use horoscope::domain::{STRICT_JSON_SUFFIX, SYSTEM_INSTRUCTION};
use horoscope::{
    build_prompt, parse_completion, CacheKey, ChatCompletionProvider, ChatMessage, Clock,
    CompletionOptions, ModerationService, PredictionCache, PredictionSet, PromptConfig,
};
use thiserror::Error;

/// Initial attempt plus one stricter retry
pub const MAX_ATTEMPTS: u32 = 2;

/// Why no AI predictions were produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiUnavailable {
    #[error("no model credential configured")]
    NotConfigured,

    #[error("model output flagged by moderation")]
    Flagged,

    #[error("no valid completion after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

pub struct AiGenerator {
    provider: Option<Arc<dyn ChatCompletionProvider>>,
    moderation: Option<Arc<dyn ModerationService>>,
    cache: Arc<dyn PredictionCache>,
    clock: Arc<dyn Clock>,
    options: CompletionOptions,
    cache_ttl: Duration,
}

impl AiGenerator {
    /// Generator without provider (always unavailable) or moderation
    pub fn new(
        cache: Arc<dyn PredictionCache>,
        clock: Arc<dyn Clock>,
        options: CompletionOptions,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            provider: None,
            moderation: None,
            cache,
            clock,
            options,
            cache_ttl,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn ChatCompletionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Enable moderation checks
    pub fn with_moderation(mut self, moderation: Arc<dyn ModerationService>) -> Self {
        self.moderation = Some(moderation);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Drop every cached generation
    #[allow(dead_code)]
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Generate predictions for the request, or explain why not
    pub async fn generate(&self, request: &PromptConfig) -> Result<PredictionSet, AiUnavailable> {
        let key = CacheKey::new(
            request.sign,
            request.style,
            request.length,
            self.clock.now().date_naive(),
        );

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!("AI cache hit: {}", key);
            return Ok(cached);
        }

        let provider = self.provider.as_ref().ok_or(AiUnavailable::NotConfigured)?;
        let prompt = build_prompt(request);

        for attempt in 1..=MAX_ATTEMPTS {
            let user_prompt = if attempt == 1 {
                prompt.clone()
            } else {
                format!("{}{}", prompt, STRICT_JSON_SUFFIX)
            };
            let messages = [
                ChatMessage::system(SYSTEM_INSTRUCTION),
                ChatMessage::user(user_prompt),
            ];

            let text = match provider.complete(&messages, &self.options).await {
                Ok(response) => response.content,
                Err(e) => {
                    tracing::error!("AI call failed (attempt {}/{}): {}", attempt, MAX_ATTEMPTS, e);
                    continue;
                }
            };

            if text.trim().is_empty() {
                tracing::warn!("AI returned empty text (attempt {}/{})", attempt, MAX_ATTEMPTS);
                continue;
            }

            if self.is_flagged(&text).await {
                tracing::warn!("AI output flagged by moderation for {}, aborting", key);
                return Err(AiUnavailable::Flagged);
            }

            let predictions = match parse_completion(&text) {
                Ok(predictions) => predictions,
                Err(e) => {
                    tracing::warn!(
                        "AI output rejected (attempt {}/{}): {}",
                        attempt,
                        MAX_ATTEMPTS,
                        e
                    );
                    continue;
                }
            };

            let combined = format!(
                "{}\n\n{}\n\n{}\n\n{}",
                predictions.daily,
                predictions.weekly,
                predictions.monthly,
                predictions.tip.as_deref().unwrap_or_default()
            );
            if self.is_flagged(&combined).await {
                tracing::warn!("AI parsed fields flagged by moderation for {}, aborting", key);
                return Err(AiUnavailable::Flagged);
            }

            self.cache.put(key, predictions.clone(), self.cache_ttl);
            tracing::info!(
                "✨ AI predictions generated for {} via {} (attempt {})",
                key,
                provider.model_id(),
                attempt
            );
            return Ok(predictions);
        }

        Err(AiUnavailable::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Moderation verdict; disabled or failing moderation counts as safe
    async fn is_flagged(&self, text: &str) -> bool {
        let Some(moderation) = &self.moderation else {
            return false;
        };

        match moderation.is_flagged(text).await {
            Ok(flagged) => flagged,
            Err(e) => {
                tracing::warn!("Moderation API error, treating as safe: {}", e);
                false
            }
        }
    }
}
