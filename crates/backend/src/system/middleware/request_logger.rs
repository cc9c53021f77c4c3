use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// One line per request: status, method, path, duration and body size.
/// 5xx are logged as errors, 4xx as warnings.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    let bytes = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    if status.is_server_error() {
        tracing::error!(status = status.as_u16(), %method, %path, elapsed_ms, bytes, "request failed");
    } else if status.is_client_error() {
        tracing::warn!(status = status.as_u16(), %method, %path, elapsed_ms, bytes, "request rejected");
    } else {
        tracing::info!(status = status.as_u16(), %method, %path, elapsed_ms, bytes, "request");
    }

    response
}
