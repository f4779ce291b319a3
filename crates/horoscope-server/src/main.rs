use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use horoscope::{CompletionOptions, TemplateStore};

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{InMemoryPredictionCache, OpenAiChatProvider, OpenAiModeration, SystemClock};
use application::{AiGenerator, HoroscopeService};
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub horoscope: Arc<HoroscopeService>,
}

/// Wire adapters and services from configuration
fn build_state(config: &AppConfig) -> AppState {
    let mut service = HoroscopeService::new(TemplateStore::builtin());

    if config.use_ai {
        let clock = Arc::new(SystemClock);
        let cache = Arc::new(InMemoryPredictionCache::new(clock.clone()));
        let options = CompletionOptions {
            max_tokens: Some(config.max_tokens),
            temperature: Some(config.temperature),
        };
        let mut generator = AiGenerator::new(cache, clock, options, config.cache_ttl);

        if let Some(api_key) = &config.openai_api_key {
            let provider = OpenAiChatProvider::new(api_key.clone(), config.model.clone())
                .with_base_url(config.base_url.clone());
            generator = generator.with_provider(Arc::new(provider));

            if config.use_moderation {
                let moderation = OpenAiModeration::new(api_key.clone())
                    .with_base_url(config.base_url.clone())
                    .with_model(config.moderation_model.clone());
                generator = generator.with_moderation(Arc::new(moderation));
                tracing::info!("🛡️  Moderation enabled ({})", config.moderation_model);
            }
        }

        if generator.is_configured() {
            tracing::info!("🤖 AI mode enabled (model: {})", config.model);
        } else {
            tracing::warn!("⚠️  USE_AI is set but OPENAI_API_KEY is missing - serving templates");
        }

        service = service.with_ai(Arc::new(generator));
    } else {
        tracing::info!("📜 Templates mode (USE_AI disabled)");
    }

    AppState {
        horoscope: Arc::new(service),
    }
}

fn init_tracing(json_logging: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("horoscope=info,horoscope_server=info,tower_http=info")
    });

    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("👋 Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(config.log_json);

    tracing::info!("🔮 Horoscope API initializing...");
    tracing::debug!("Configuration: {:?}", config);

    let state = build_state(&config);
    let app = routes::app(state, &config.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Horoscope API ready on http://{}", addr);
    tracing::info!("📖 OpenAPI document at /api-docs/openapi.json");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    #[test]
    fn test_templates_mode_by_default() {
        let state = build_state(&config(&[]));
        assert!(!state.horoscope.ai_enabled());
    }

    #[test]
    fn test_ai_mode_without_key_still_enabled() {
        // Requests degrade to templates with a note
        let state = build_state(&config(&[("USE_AI", "true")]));
        assert!(state.horoscope.ai_enabled());
    }

    #[test]
    fn test_ai_mode_with_key() {
        let state = build_state(&config(&[
            ("USE_AI", "TRUE"),
            ("OPENAI_API_KEY", "sk-test"),
            ("USE_MODERATION", "true"),
        ]));
        assert!(state.horoscope.ai_enabled());
    }
}
