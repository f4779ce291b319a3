//! OpenAI chat completions

use async_trait::async_trait;
use horoscope::{ChatCompletionProvider, ChatMessage, CompletionOptions, CompletionResponse, DomainError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::map_http_error;
use crate::config::DEFAULT_BASE_URL;

/// Chat completion provider for OpenAI-compatible endpoints
#[derive(Clone)]
pub struct OpenAiChatProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
    /// Legacy completions shape
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionResponse {
    /// First choice's message content, else its legacy text, else empty
    fn into_completion(self, requested_model: &str) -> CompletionResponse {
        let first = self.choices.into_iter().next();
        let finish_reason = first.as_ref().and_then(|c| c.finish_reason.clone());
        let content = first
            .and_then(|choice| {
                choice
                    .message
                    .and_then(|m| m.content)
                    .filter(|c| !c.is_empty())
                    .or(choice.text)
            })
            .unwrap_or_default();

        CompletionResponse {
            content,
            model: self.model.unwrap_or_else(|| requested_model.to_string()),
            finish_reason,
        }
    }
}

impl OpenAiChatProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    /// Point at another OpenAI-compatible server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatCompletionProvider for OpenAiChatProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(DomainError::external)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))?;

        Ok(payload.into_completion(&self.model))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_content_falls_back_to_text() {
        let payload: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [{ "text": "legacy" }] })).unwrap();
        assert_eq!(payload.into_completion("m").content, "legacy");

        let payload: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        let completion = payload.into_completion("m");
        assert_eq!(completion.content, "");
        assert_eq!(completion.model, "m");
    }

    #[tokio::test]
    async fn test_complete_sends_messages_and_options() {
        let router = Router::new().route(
            "/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["authorization"], "Bearer sk-test");
                assert_eq!(body["model"], "gpt-test");
                assert_eq!(body["max_tokens"], 120);
                assert_eq!(body["messages"][0]["role"], "system");
                assert_eq!(body["messages"][1]["content"], "Bonjour");
                Json(json!({
                    "model": "gpt-test-0001",
                    "choices": [{
                        "message": { "role": "assistant", "content": "{\"daily\":\"ok\"}" },
                        "finish_reason": "stop"
                    }]
                }))
            }),
        );
        let base_url = spawn_server(router).await;

        let provider = OpenAiChatProvider::new("sk-test", "gpt-test").with_base_url(base_url);
        let options = CompletionOptions {
            max_tokens: Some(120),
            temperature: Some(0.2),
        };
        let response = provider
            .complete(
                &[ChatMessage::system("Tu es un assistant"), ChatMessage::user("Bonjour")],
                &options,
            )
            .await
            .unwrap();

        assert_eq!(response.content, "{\"daily\":\"ok\"}");
        assert_eq!(response.model, "gpt-test-0001");
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    }

    #[tokio::test]
    async fn test_complete_maps_api_errors() {
        let router = Router::new().route(
            "/chat/completions",
            post(|| async {
                (
                    axum::http::StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "error": { "message": "Rate limit reached" } })),
                )
            }),
        );
        let base_url = spawn_server(router).await;

        let provider = OpenAiChatProvider::new("sk-test", "gpt-test").with_base_url(base_url);
        let err = provider
            .complete(&[ChatMessage::user("x")], &CompletionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(ref m) if m.contains("Rate limit reached")));
    }
}
