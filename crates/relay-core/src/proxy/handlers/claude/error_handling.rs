//! Error responses for Claude messages

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use relay_types::ProxyError;
use serde_json::json;

/// Render a [`ProxyError`] as a Messages API error envelope.
pub fn error_response(err: &ProxyError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "type": "error",
            "error": {
                "type": err.error_type(),
                "message": err.to_string()
            }
        })),
    )
        .into_response()
}

/// Relay a non-2xx upstream answer untouched: same status, same body, same content type.
pub async fn forward_upstream_error(response: reqwest::Response, trace_id: &str) -> Response {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = match response.bytes().await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("[{}] Failed to read upstream error body: {}", trace_id, e);
            return error_response(&ProxyError::UpstreamUnavailable {
                message: format!("Failed to read upstream error body: {}", e),
            });
        },
    };

    tracing::warn!(
        "[{}] Upstream returned {}: {}",
        trace_id,
        status.as_u16(),
        String::from_utf8_lossy(&body).chars().take(500).collect::<String>()
    );

    let mut builder = Response::builder().status(status);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    builder.body(Body::from(body)).unwrap_or_else(|e| {
        tracing::error!("[{}] Failed to build passthrough response: {}", trace_id, e);
        status.into_response()
    })
}
