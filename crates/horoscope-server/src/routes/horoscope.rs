//! Horoscope Route - POST /api/horoscope
//!
//! Input validation happens here; everything past it degrades to templates
//! instead of failing.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use horoscope::{BirthInput, Length, Style};

use crate::application::HoroscopeOutcome;
use crate::error::ApiError;
use crate::models::{HoroscopeRequest, HoroscopeResponse, Provenance, ResponseMeta};
use crate::AppState;

impl From<HoroscopeOutcome> for HoroscopeResponse {
    fn from(outcome: HoroscopeOutcome) -> Self {
        let meta = match (outcome.source, outcome.style) {
            (Provenance::OpenAi, Some(style)) => ResponseMeta::openai(style),
            _ => ResponseMeta::templates(outcome.note),
        };

        Self {
            sign: outcome.sign.to_string(),
            predictions: outcome.predictions.into(),
            meta,
        }
    }
}

/// Compute sign and predictions for a birth date
#[utoipa::path(
    post,
    path = "/api/horoscope",
    request_body = HoroscopeRequest,
    responses(
        (status = 200, description = "Horoscope generated", body = HoroscopeResponse),
        (status = 400, description = "Missing or invalid dateOfBirth", body = crate::models::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::models::ErrorResponse)
    ),
    tag = "Horoscope"
)]
pub async fn create_horoscope(
    State(state): State<AppState>,
    payload: Result<Json<HoroscopeRequest>, JsonRejection>,
) -> Result<Json<HoroscopeResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected horoscope body: {}", rejection);
        ApiError::BadRequest(rejection.body_text())
    })?;

    let input = BirthInput::parse(payload.date_of_birth.as_deref(), payload.gender.as_deref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let style = Style::from_param(payload.style.as_deref());
    let length = Length::from_param(payload.length.as_deref());

    let outcome = state
        .horoscope
        .horoscope(&input, style, length)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(
        "🔮 Horoscope served: {} from {:?} (style={}, length={})",
        outcome.sign,
        outcome.source,
        style,
        length
    );

    Ok(Json(outcome.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/horoscope", post(create_horoscope))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use horoscope::TemplateStore;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::ai_generator::tests::{
        generator_with, test_clock, ScriptedProvider, VALID_JSON,
    };
    use crate::application::horoscope_service::AI_UNAVAILABLE_NOTE;
    use crate::application::HoroscopeService;
    use crate::routes;
    use crate::AppState;

    /// The checked-in SPA assets
    fn public_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public")
    }

    fn app_with(service: HoroscopeService) -> axum::Router {
        let state = AppState {
            horoscope: Arc::new(service),
        };
        routes::app(state, &public_dir())
    }

    fn templates_only() -> axum::Router {
        app_with(HoroscopeService::new(TemplateStore::builtin()).with_seed(9))
    }

    async fn post_json(app: axum::Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/horoscope")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_templates_response_for_cancer() {
        let (status, body) = post_json(templates_only(), r#"{"dateOfBirth":"1990-07-10"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sign"], "Cancer");
        assert_eq!(body["meta"], json!({ "source": "templates" }));
        for key in ["daily", "weekly", "monthly"] {
            assert!(!body["predictions"][key].as_str().unwrap().is_empty());
        }
        assert!(body["predictions"].get("tip").is_none());
    }

    #[tokio::test]
    async fn test_invalid_date() {
        let (status, body) = post_json(templates_only(), r#"{"dateOfBirth":"bad-date"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "dateOfBirth invalid" }));
    }

    #[tokio::test]
    async fn test_missing_date() {
        let (status, body) = post_json(templates_only(), r#"{"gender":"femme"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "dateOfBirth is required (YYYY-MM-DD)" }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error() {
        let (status, body) = post_json(templates_only(), "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_ai_unavailable_degrades_to_templates() {
        let generator = Arc::new(generator_with(None, test_clock()));
        let app = app_with(HoroscopeService::new(TemplateStore::builtin()).with_ai(generator));

        let (status, body) = post_json(
            app,
            r#"{"dateOfBirth":"2000-12-22","style":"romantique"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sign"], "Capricorne");
        assert_eq!(body["meta"]["source"], "templates");
        assert_eq!(body["meta"]["note"], AI_UNAVAILABLE_NOTE);
    }

    #[tokio::test]
    async fn test_ai_response_carries_style_and_tip() {
        let provider = ScriptedProvider::replying(VALID_JSON);
        let generator = Arc::new(generator_with(Some(provider), test_clock()));
        let app = app_with(HoroscopeService::new(TemplateStore::builtin()).with_ai(generator));

        let (status, body) = post_json(
            app,
            r#"{"dateOfBirth":"1990-07-10","gender":"homme","style":"gothique","length":"long"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"], json!({ "source": "openai", "style": "default" }));
        assert_eq!(body["predictions"]["daily"], "Jour lumineux.");
        assert_eq!(body["predictions"]["tip"], "Souris.");
    }

    #[tokio::test]
    async fn test_health() {
        let response = templates_only()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    async fn get_body(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_route_serves_index() {
        let (status, body) = get_body(templates_only(), "/mon/horoscope").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Votre horoscope</h1>"));
    }

    #[tokio::test]
    async fn test_get_on_api_path_serves_index() {
        let (status, body) = get_body(templates_only(), "/api/horoscope").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Votre horoscope</h1>"));
    }

    #[tokio::test]
    async fn test_static_asset_served() {
        let (status, body) = get_body(templates_only(), "/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/api/horoscope"));
    }
}
