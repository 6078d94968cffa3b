use crate::proxy::common::generate_trace_id;
use crate::proxy::mappers::claude::transform_claude_request_in;
use crate::proxy::routing::{extract_client_key, resolve_upstream_target, MESSAGES_SUFFIX};
use crate::proxy::server::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Response,
};
use bytes::Bytes;
use relay_types::ProxyError;
use tracing::{debug, info};

use super::error_handling::{error_response, forward_upstream_error};
use super::request_validation::{parse_request, summarize};
use super::response_handler::{handle_nonstreaming_success, ResponseContext};
use super::streaming::{handle_streaming_response, StreamingContext};

/// `POST /v1/messages` and `POST /<dynamic prefix>/v1/messages`.
pub async fn handle_messages(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path();
    if !path.ends_with(MESSAGES_SUFFIX) {
        return error_response(&ProxyError::NotFound {
            message: format!("URL must end with {}", MESSAGES_SUFFIX),
        });
    }

    let trace_id = generate_trace_id();
    debug!("[{}] handle_messages called. Body len: {}", trace_id, body.len());

    let request = match parse_request(&body) {
        Ok(r) => r,
        Err(response) => return response,
    };

    let client_key = extract_client_key(&headers);
    let target = match resolve_upstream_target(&state.config, path, &request.model, &client_key) {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!("[{}] {}", trace_id, e);
            return error_response(&e);
        },
    };

    info!(
        "[{}] Claude request: {} → {} @ {}",
        trace_id,
        summarize(&request),
        target.model_name,
        target.base_url
    );

    let openai_req = transform_claude_request_in(&request, &target.model_name);

    let response = match state.upstream.chat_completions(&target, &openai_req).await {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("[{}] {}", trace_id, e);
            return error_response(&e);
        },
    };

    let status = response.status();
    info!("[{}] Upstream status: {}", trace_id, status.as_u16());
    if !status.is_success() {
        return forward_upstream_error(response, &trace_id).await;
    }

    if request.stream {
        let ctx = StreamingContext { trace_id, requested_model: request.model };
        handle_streaming_response(response, &ctx)
    } else {
        let ctx = ResponseContext { trace_id, requested_model: request.model };
        handle_nonstreaming_success(response, &ctx).await
    }
}
