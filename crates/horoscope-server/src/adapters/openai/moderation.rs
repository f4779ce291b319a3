//! OpenAI moderation endpoint

use async_trait::async_trait;
use horoscope::{DomainError, ModerationService};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::map_http_error;
use crate::config::{DEFAULT_BASE_URL, DEFAULT_MODERATION_MODEL};

/// Moderation check against `/moderations`
#[derive(Clone)]
pub struct OpenAiModeration {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ModerationRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ModerationResponse {
    #[serde(default)]
    results: Vec<ModerationResult>,
}

#[derive(Deserialize)]
struct ModerationResult {
    #[serde(default)]
    flagged: bool,
}

impl OpenAiModeration {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODERATION_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl ModerationService for OpenAiModeration {
    async fn is_flagged(&self, text: &str) -> Result<bool, DomainError> {
        let request = ModerationRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .client
            .post(format!("{}/moderations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(DomainError::external)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body));
        }

        let payload: ModerationResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        // Only the first result matters: a single input was sent
        Ok(payload.results.first().is_some_and(|r| r.flagged))
    }
}
