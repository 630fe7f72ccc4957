// src/handlers/assets.rs
use crate::content::RESUME_ROUTE;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    body::Body,
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

pub const RESUME_FILENAME: &str = "Resume_AzharDzakwanAzizi.pdf";

pub fn asset_routes() -> Router {
    Router::new().route(RESUME_ROUTE, get(download_resume))
}

/// Stream the bundled resume PDF; the page links to it with `target="_blank"`.
async fn download_resume(Extension(state): Extension<Arc<AppState>>) -> Result<Response, ApiError> {
    let path = &state.config.resume_path;

    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Resume not readable at {}: {}", path.display(), e);
            return Err(ApiError::ResumeNotFound);
        }
    };

    let size = file
        .metadata()
        .await
        .map(|m| m.len())
        .map_err(|e| ApiError::Internal(format!("resume metadata: {}", e)))?;

    let body = Body::from_stream(ReaderStream::new(file));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_LENGTH, size.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", RESUME_FILENAME),
            ),
        ],
        body,
    )
        .into_response())
}
