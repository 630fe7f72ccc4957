// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong talking to the generative-language endpoint.
/// Callers of `TextGenerator::generate` never see this; it is folded into a fallback string.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Gemini API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Response contained no candidate text")]
    EmptyResponse,
}

/// Startup configuration that cannot be honoured.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },
    #[error("Invalid PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    #[error("Unknown project: {0}")]
    ProjectNotFound(String),
    #[error("Resume not available")]
    ResumeNotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::SessionNotFound(_) | ApiError::ProjectNotFound(_) | ApiError::ResumeNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let message = match &self {
            ApiError::Internal(_) if !cfg!(debug_assertions) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(json!({
                "success": false,
                "message": message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::SessionNotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::ProjectNotFound("x".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_gemini_error_messages() {
        let err = GeminiError::Status { status: 403, body: "denied".into() };
        assert_eq!(err.to_string(), "Gemini API returned 403: denied");
        assert_eq!(GeminiError::EmptyResponse.to_string(), "Response contained no candidate text");
    }
}
