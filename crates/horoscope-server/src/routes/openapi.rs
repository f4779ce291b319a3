//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, HealthCheck, HoroscopeRequest, HoroscopeResponse, PredictionsResponse,
    Provenance, ResponseMeta,
};
use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::horoscope::create_horoscope,
        super::health::health_check,
    ),
    components(schemas(
        HoroscopeRequest,
        HoroscopeResponse,
        PredictionsResponse,
        ResponseMeta,
        Provenance,
        ErrorResponse,
        HealthCheck,
    )),
    tags(
        (name = "Horoscope", description = "Zodiac sign and French predictions"),
        (name = "Health", description = "Service status"),
    ),
    info(
        title = "Horoscope API",
        description = "Zodiac sign from a birth date with template or AI-written French horoscopes"
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_horoscope_path() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/api/horoscope"]["post"].is_object());
        assert!(doc["components"]["schemas"]["HoroscopeResponse"].is_object());
    }
}
