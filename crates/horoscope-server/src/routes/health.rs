//! Health check

use axum::{extract::State, routing::get, Json, Router};

use crate::models::HealthCheck;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Horoscope API is running - the stars are aligned".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ai_enabled: state.horoscope.ai_enabled(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
