//! Streaming response handling for Claude messages

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::proxy::mappers::claude::create_claude_sse_stream;

pub struct StreamingContext {
    pub trace_id: String,
    pub requested_model: String,
}

pub fn handle_streaming_response(response: reqwest::Response, ctx: &StreamingContext) -> Response {
    let claude_stream = create_claude_sse_stream(
        response.bytes_stream(),
        ctx.requested_model.clone(),
        ctx.trace_id.clone(),
    );
    build_sse_response(ctx, claude_stream)
}

fn build_sse_response<S>(ctx: &StreamingContext, stream: S) -> Response
where
    S: futures::Stream<Item = Result<Bytes, String>> + Send + 'static,
{
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(stream))
        .unwrap_or_else(|e| {
            tracing::error!("[{}] Failed to build SSE response: {}", ctx.trace_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal streaming setup error").into_response()
        })
}
