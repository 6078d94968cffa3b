
use reqwest::{header, Client, Response};
use relay_types::protocol::openai::OpenAIRequest;
use relay_types::ProxyError;

use crate::proxy::routing::UpstreamTarget;

/// Thin wrapper over a shared `reqwest::Client` that speaks ChatCompletions.
#[derive(Clone)]
pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    /// Create a new UpstreamClient with the given HTTP client.
    ///
    /// Accepts a pre-built `reqwest::Client` so TLS setup happens once, before
    /// the runtime starts serving.
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// POST `request` to `<base_url>/chat/completions`.
    ///
    /// Any HTTP status is returned as `Ok`; only transport failures are errors.
    /// The body is left unread so streamed responses can be consumed lazily.
    pub async fn chat_completions(
        &self,
        target: &UpstreamTarget,
        request: &OpenAIRequest,
    ) -> Result<Response, ProxyError> {
        let url = target.chat_completions_url();
        tracing::debug!("Upstream request: POST {} (model={}, stream={})", url, request.model, request.stream);

        self.http_client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", target.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| ProxyError::UpstreamUnavailable {
                message: format!("Request to {} failed: {}", url, e),
            })
    }
}
