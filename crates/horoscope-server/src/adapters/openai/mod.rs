//! OpenAI-compatible HTTP adapters
//!
//! Chat completions and moderation over the `/v1` REST API.

mod chat;
mod moderation;

pub use chat::OpenAiChatProvider;
pub use moderation::OpenAiModeration;

use horoscope::DomainError;
use reqwest::StatusCode;

/// Turn a non-2xx response into a domain error, preferring the API's own message
fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::ExternalService(format!("OpenAI API error ({}): {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_http_error_extracts_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = map_http_error(StatusCode::UNAUTHORIZED, body.to_string());
        assert_eq!(
            err.to_string(),
            "External service error: OpenAI API error (401): Incorrect API key provided"
        );

        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(err.to_string().ends_with("(502): upstream down"));
    }
}
