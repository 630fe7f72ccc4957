// src/handlers/projects.rs
use crate::content::PROJECTS;
use crate::error::ApiError;
use crate::handlers::chat::load_session;
use crate::models::api::InsightResponse;
use crate::services::InsightOutcome;
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn project_routes() -> Router {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/session/:session_id/insights", get(list_insights))
        .route("/api/session/:session_id/insights/:slug", post(generate_insight))
}

async fn list_projects() -> Json<Value> {
    Json(json!({ "success": true, "projects": PROJECTS }))
}

async fn list_insights(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let insights = session.insights.lock().await.views();
    Ok(Json(json!({ "success": true, "insights": insights })))
}

async fn generate_insight(
    Path((session_id, slug)): Path<(String, String)>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<InsightResponse>, ApiError> {
    let session = load_session(&state, &session_id).await?;

    let generated = match state.assistant.generate_insight(&session, &slug).await {
        InsightOutcome::Generated { .. } => true,
        InsightOutcome::AlreadyGenerated { .. } | InsightOutcome::InProgress => false,
        InsightOutcome::UnknownProject => return Err(ApiError::ProjectNotFound(slug)),
        InsightOutcome::Abandoned => return Err(ApiError::SessionNotFound(session_id)),
    };

    let view = session
        .insights
        .lock()
        .await
        .view(&slug)
        .ok_or_else(|| ApiError::ProjectNotFound(slug.clone()))?;

    Ok(Json(InsightResponse {
        success: true,
        generated,
        insight: view,
    }))
}
