//! Request parsing for the Claude messages handler

use super::error_handling::error_response;
use axum::response::Response;
use relay_types::protocol::claude::ClaudeRequest;
use relay_types::ProxyError;

/// Parse the raw request body; a body that is not a Messages request is a 400.
#[allow(clippy::result_large_err)]
pub fn parse_request(body: &[u8]) -> Result<ClaudeRequest, Response> {
    serde_json::from_slice(body).map_err(|e| {
        error_response(&ProxyError::InvalidRequest {
            message: format!("Invalid request body: {}", e),
        })
    })
}

pub fn summarize(request: &ClaudeRequest) -> String {
    format!(
        "model={}, stream={}, messages={}, tools={}",
        request.model,
        request.stream,
        request.messages.len(),
        request.tools.as_ref().map_or(0, Vec::len)
    )
}
