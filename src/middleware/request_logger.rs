use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Instant;
use uuid::Uuid;

const MAX_BODY_LOG_SIZE: usize = 1024; // 1KB of the body is logged
// Same ceiling axum's Json extractor enforces by default.
const MAX_BUFFERED_BODY_SIZE: usize = 2 * 1024 * 1024;
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogSettings {
    pub log_body: bool,
}

pub async fn request_logger_middleware(
    State(settings): State<RequestLogSettings>,
    mut req: Request,
    next: Next,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let header_value = HeaderValue::from_str(&request_id).ok();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    if let Some(value) = &header_value {
        req.headers_mut().insert(REQUEST_ID_HEADER, value.clone());
    }

    if settings.log_body {
        let (parts, body) = req.into_parts();
        let bytes = match axum::body::to_bytes(body, MAX_BUFFERED_BODY_SIZE).await {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    uri = %uri,
                    "Request body too large or failed to read"
                );
                return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
            }
        };

        let sanitized_body = match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(json) => {
                let sanitized = crate::utils::sanitize::sanitize_json(&json);
                serde_json::to_string(&sanitized)
                    .map(|body| truncate_for_log(&body, bytes.len()))
                    .unwrap_or_else(|_| "[invalid json]".to_string())
            }
            Err(_) => format!("[non-json, {} bytes]", bytes.len()),
        };

        tracing::info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            body_size = bytes.len(),
            body = %sanitized_body,
            "Incoming request"
        );

        req = Request::from_parts(parts, Body::from(bytes));
    } else {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            "Incoming request"
        );
    }

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        latency_ms = latency.as_millis() as u64,
        "Outgoing response"
    );

    let (mut parts, body) = response.into_parts();
    if let Some(value) = header_value {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    Response::from_parts(parts, body)
}

/// Cuts a logged body at `MAX_BODY_LOG_SIZE` bytes on a char boundary.
fn truncate_for_log(body: &str, total_bytes: usize) -> String {
    if body.len() <= MAX_BODY_LOG_SIZE {
        return body.to_string();
    }

    let mut end = MAX_BODY_LOG_SIZE;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated, {} bytes]", &body[..end], total_bytes)
}
