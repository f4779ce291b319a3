//! Application configuration
//!
//! Built once at startup from the process environment (after `.env` is
//! loaded) and passed down explicitly.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODERATION_MODEL: &str = "omni-moderation-latest";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone)]
pub struct AppConfig {
    /// OPENAI_API_KEY - enables the AI path when set
    pub openai_api_key: Option<String>,
    /// USE_AI - invoke the AI generator at all
    pub use_ai: bool,
    /// OPENAI_MODEL
    pub model: String,
    /// OPENAI_BASE_URL
    pub base_url: String,
    /// AI_TEMPERATURE
    pub temperature: f32,
    /// AI_MAX_TOKENS
    pub max_tokens: u32,
    /// AI_CACHE_TTL_SECONDS
    pub cache_ttl: Duration,
    /// USE_MODERATION
    pub use_moderation: bool,
    /// MODERATION_MODEL
    pub moderation_model: String,
    /// PORT
    pub port: u16,
    /// PUBLIC_DIR - static assets and SPA index
    pub public_dir: PathBuf,
    /// LOG_JSON
    pub log_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY"),
            use_ai: flag(get("USE_AI")),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature: parse_or("AI_TEMPERATURE", get("AI_TEMPERATURE"), DEFAULT_TEMPERATURE)?,
            max_tokens: parse_or("AI_MAX_TOKENS", get("AI_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?,
            cache_ttl: Duration::from_secs(parse_or(
                "AI_CACHE_TTL_SECONDS",
                get("AI_CACHE_TTL_SECONDS"),
                DEFAULT_CACHE_TTL_SECS,
            )?),
            use_moderation: flag(get("USE_MODERATION")),
            moderation_model: get("MODERATION_MODEL")
                .unwrap_or_else(|| DEFAULT_MODERATION_MODEL.to_string()),
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            log_json: flag(get("LOG_JSON")),
        })
    }
}

// The API key stays out of logs
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .field("use_ai", &self.use_ai)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("cache_ttl", &self.cache_ttl)
            .field("use_moderation", &self.use_moderation)
            .field("moderation_model", &self.moderation_model)
            .field("port", &self.port)
            .field("public_dir", &self.public_dir)
            .field("log_json", &self.log_json)
            .finish()
    }
}

/// Opt-in flag: only "true" enables
fn flag(value: Option<String>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value: raw,
        }),
    }
}
