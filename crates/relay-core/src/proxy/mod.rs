//! Proxy module - Claude Messages API in front of ChatCompletions upstreams
//!
//! This module provides:
//! - Claude → OpenAI request translation (with tool schema sanitizing)
//! - OpenAI → Claude response translation (complete and streamed)
//! - Upstream target resolution and the HTTP client that calls it
//! - The axum router that ties them together

pub mod common;
pub mod handlers;
pub mod mappers;
pub mod middleware;
pub mod routing;
pub mod server;
pub mod upstream;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use routing::{resolve_upstream_target, UpstreamTarget};
pub use server::{build_proxy_router, AppState};
pub use upstream::client::UpstreamClient;
