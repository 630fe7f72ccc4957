// src/handlers/chat.rs
use crate::error::ApiError;
use crate::models::api::{SendMessageRequest, SendMessageResponse, SessionResponse};
use crate::services::{ChatSendOutcome, VisitSession};
use crate::AppState;
use axum::{
    extract::{Extension, Path},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn chat_routes() -> Router {
    Router::new()
        .route("/api/session", post(start_session))
        .route("/api/session/:session_id", delete(end_session))
        .route("/api/chat/:session_id", get(get_chat))
        .route("/api/chat/:session_id/toggle", post(toggle_chat))
        .route("/api/chat/:session_id/close", post(close_chat))
        .route("/api/chat/:session_id/messages", post(send_message))
}

pub(crate) async fn load_session(
    state: &AppState,
    session_id: &str,
) -> Result<Arc<VisitSession>, ApiError> {
    state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| ApiError::SessionNotFound(session_id.to_string()))
}

async fn start_session(Extension(state): Extension<Arc<AppState>>) -> Json<SessionResponse> {
    let session = state.sessions.create().await;
    let chat = session.chat.lock().await.snapshot();
    let insights = session.insights.lock().await.views();

    Json(SessionResponse {
        success: true,
        session_id: session.id.to_string(),
        chat,
        insights,
    })
}

async fn end_session(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    if state.sessions.end(&session_id).await {
        Ok(Json(json!({ "success": true })))
    } else {
        Err(ApiError::SessionNotFound(session_id))
    }
}

async fn get_chat(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let chat = session.chat.lock().await.snapshot();
    Ok(Json(json!({ "success": true, "chat": chat })))
}

async fn toggle_chat(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let mut chat = session.chat.lock().await;
    let widget_state = chat.toggle();
    tracing::debug!(session_id = %session.id, state = ?widget_state, "Chat widget toggled");
    Ok(Json(json!({ "success": true, "chat": chat.snapshot() })))
}

async fn close_chat(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let session = load_session(&state, &session_id).await?;
    let mut chat = session.chat.lock().await;
    chat.close();
    Ok(Json(json!({ "success": true, "chat": chat.snapshot() })))
}

async fn send_message(
    Path(session_id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let session = load_session(&state, &session_id).await?;

    let outcome = state.assistant.send_chat(&session, &request.message).await;
    let chat = session.chat.lock().await.snapshot();

    let response = match outcome {
        ChatSendOutcome::Accepted { reply } => SendMessageResponse {
            success: true,
            accepted: true,
            reason: None,
            reply: Some(reply),
            chat,
        },
        ChatSendOutcome::Rejected(reason) => SendMessageResponse {
            success: true,
            accepted: false,
            reason: Some(reason),
            reply: None,
            chat,
        },
        ChatSendOutcome::Abandoned => return Err(ApiError::SessionNotFound(session_id)),
    };

    Ok(Json(response))
}
