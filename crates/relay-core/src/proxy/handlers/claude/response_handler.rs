//! Non-streaming response handling for Claude messages

use super::error_handling::error_response;
use crate::proxy::mappers::claude::transform_response;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_types::protocol::openai::OpenAIResponse;
use relay_types::ProxyError;

pub struct ResponseContext {
    pub trace_id: String,
    pub requested_model: String,
}

pub async fn handle_nonstreaming_success(response: reqwest::Response, ctx: &ResponseContext) -> Response {
    let bytes = match response.bytes().await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("[{}] Failed to read upstream body: {}", ctx.trace_id, e);
            return error_response(&ProxyError::UpstreamUnavailable {
                message: format!("Failed to read body: {}", e),
            });
        },
    };

    tracing::debug!("[{}] Upstream response received, len: {} bytes", ctx.trace_id, bytes.len());

    let openai_resp: OpenAIResponse = match serde_json::from_slice(&bytes) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("[{}] Upstream body is not a ChatCompletions response: {}", ctx.trace_id, e);
            return error_response(&ProxyError::UpstreamContract {
                message: format!("Parse error: {}", e),
            });
        },
    };

    match transform_response(&openai_resp, &ctx.requested_model) {
        Ok(claude_response) => {
            tracing::info!(
                "[{}] Request finished. Blocks: {}, stop_reason: {:?}, tokens: {}/{}",
                ctx.trace_id,
                claude_response.content.len(),
                claude_response.stop_reason,
                claude_response.usage.input_tokens,
                claude_response.usage.output_tokens
            );
            (StatusCode::OK, Json(claude_response)).into_response()
        },
        Err(e) => {
            tracing::error!("[{}] Translation failed: {}", ctx.trace_id, e);
            error_response(&ProxyError::from(e))
        },
    }
}
