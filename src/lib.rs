// lib.rs - Portfolio site: rendered page, visit sessions, and the Gemini-backed assistant
pub mod config;
pub mod content;
pub mod error;
pub mod gemini_client;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod services;
pub mod utils;

use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub use config::AppConfig;
pub use gemini_client::{GeminiClient, TextGenerator};
pub use services::{PortfolioAssistant, SessionStore};

/// Shared state handed to every handler through `Extension`.
pub struct AppState {
    pub config: AppConfig,
    pub sessions: services::SharedSessionStore,
    pub assistant: PortfolioAssistant,
}

impl AppState {
    pub fn new(config: AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config,
            sessions: Arc::new(SessionStore::new()),
            assistant: PortfolioAssistant::new(generator),
        }
    }

    /// State wired to the real Gemini endpoint described by `config`.
    pub fn with_gemini(config: AppConfig) -> Self {
        let client = GeminiClient::from_config(&config);
        Self::new(config, Arc::new(client))
    }
}

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::assets::asset_routes())
        .merge(handlers::chat::chat_routes())
        .merge(handlers::projects::project_routes())
        .merge(handlers::status::status_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
