use crate::error::AppResult;
use crate::proxy::common::build_http_client;
use crate::proxy::handlers;
use crate::proxy::middleware::cors_layer;
use crate::proxy::upstream::client::UpstreamClient;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use relay_types::RelayConfig;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Request bodies carry base64 images; allow up to 100MB.
const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

/// Axum application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: RelayConfig, upstream: UpstreamClient) -> Self {
        Self { config: Arc::new(config), upstream: Arc::new(upstream) }
    }

    /// Build the state with a fresh HTTP client configured from `config`.
    pub fn from_config(config: RelayConfig) -> AppResult<Self> {
        let http_client = build_http_client(config.connect_timeout_secs)?;
        Ok(Self::new(config, UpstreamClient::new(http_client)))
    }
}

/// Build the relay router.
///
/// `POST /v1/messages` and any `POST /<prefix>/v1/messages` are translated;
/// other POST paths get a 404 error envelope.
pub fn build_proxy_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::handle_health))
        .route("/healthz", get(handlers::health::handle_health))
        .route("/v1/messages", post(handlers::claude::handle_messages))
        .route("/*path", post(handlers::claude::handle_messages))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}
