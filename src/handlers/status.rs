// src/handlers/status.rs
use crate::AppState;
use axum::{extract::Extension, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn status_routes() -> Router {
    Router::new().route("/api/status", get(api_status))
}

async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let gemini_status = if state.config.gemini_configured() { "configured" } else { "not_configured" };
    let resume_available = tokio::fs::try_exists(&state.config.resume_path)
        .await
        .unwrap_or(false);
    let resume_status = if resume_available { "available" } else { "missing" };

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "gemini_ai": gemini_status,
            "gemini_model": state.config.gemini_model,
            "resume": resume_status,
        },
        "active_sessions": state.sessions.count().await,
        "endpoints": {
            "page": "/",
            "resume": "/resume",
            "status": "/api/status",
            "session": "/api/session",
            "chat": "/api/chat/*",
            "projects": "/api/projects",
        }
    }))
}
