//! Horoscope API Routes
//!
//! - POST /api/horoscope - Sign + predictions for a birth date
//! - GET /health - Liveness
//! - GET /api-docs/openapi.json - OpenAPI document
//! - everything else - static assets, SPA index as fallback

use std::path::Path;

use axum::{routing::get_service, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod health;
pub mod horoscope;
pub mod openapi;

/// Full application router
pub fn app(state: AppState, public_dir: &Path) -> Router {
    let index = ServeFile::new(public_dir.join("index.html"));
    let assets = ServeDir::new(public_dir).fallback(index.clone());

    Router::new()
        .merge(health::router())
        .merge(horoscope::router())
        // Browsers landing on the API path get the SPA, not a 405
        .route("/api/horoscope", get_service(index))
        .merge(openapi::router())
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
