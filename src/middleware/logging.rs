// src/middleware/logging.rs
use axum::{
    extract::{MatchedPath, Request},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Structured access log for every request, tagged with a per-request id that is
/// also returned to the client.
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let remote_addr = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        "incoming request"
    );

    let mut response = next.run(req).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis();
    match status_class(status) {
        StatusClass::ServerError => tracing::error!(
            request_id = %request_id, method = %method, path = %path,
            status = status.as_u16(), duration_ms = duration_ms,
            "request completed (server error)"
        ),
        StatusClass::ClientError => tracing::warn!(
            request_id = %request_id, method = %method, path = %path,
            status = status.as_u16(), duration_ms = duration_ms,
            "request completed (client error)"
        ),
        StatusClass::Ok => tracing::info!(
            request_id = %request_id, method = %method, path = %path,
            status = status.as_u16(), duration_ms = duration_ms,
            "request completed"
        ),
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[derive(Debug, PartialEq, Eq)]
enum StatusClass {
    Ok,
    ClientError,
    ServerError,
}

fn status_class(status: StatusCode) -> StatusClass {
    if status.is_server_error() {
        StatusClass::ServerError
    } else if status.is_client_error() {
        StatusClass::ClientError
    } else {
        StatusClass::Ok
    }
}
