//! Upstream target resolution.
//!
//! Order of precedence:
//! 1. Model name contains the keyword route's keyword
//! 2. Dynamic path prefix: `/<scheme?>/<host>/<path...>/<model>/v1/messages`
//! 3. Default base URL with the requested model
//!
//! The client's key (from `x-api-key` or `Authorization`) is forwarded for
//! routes 2 and 3; the keyword route carries its own key.

use axum::http::HeaderMap;
use relay_types::{ProxyError, RelayConfig};

/// Every routed request path must end with this suffix.
pub const MESSAGES_SUFFIX: &str = "/v1/messages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub base_url: String,
    pub model_name: String,
    pub api_key: String,
}

impl UpstreamTarget {
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Split a dynamic path prefix into `(base_url, model_name)`.
///
/// Needs at least two non-empty segments before the final `/v1/messages`.
/// A leading `http`/`https` segment is taken as the scheme, otherwise
/// `https` is assumed.
pub fn parse_path_and_model(path: &str) -> Option<(String, String)> {
    let prefix = &path[..path.rfind(MESSAGES_SUFFIX)?];
    let mut parts: Vec<&str> = prefix.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return None;
    }

    let model_name = parts.pop()?.to_string();
    let first = parts.first()?.to_ascii_lowercase();
    let base_url = if first == "http" || first == "https" {
        format!("{}://{}", first, parts[1..].join("/"))
    } else {
        format!("https://{}", parts.join("/"))
    };

    Some((base_url, model_name))
}

/// `x-api-key`, else the last space-separated token of `Authorization`, else empty.
pub fn extract_client_key(headers: &HeaderMap) -> String {
    if let Some(key) = headers.get("x-api-key").and_then(|v| v.to_str().ok()) {
        if !key.is_empty() {
            return key.to_string();
        }
    }
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.rsplit(' ').next())
        .unwrap_or_default()
        .to_string()
}

pub fn resolve_upstream_target(
    config: &RelayConfig,
    path: &str,
    requested_model: &str,
    client_key: &str,
) -> Result<UpstreamTarget, ProxyError> {
    let route = &config.keyword_route;
    if route.matches(requested_model) {
        return Ok(UpstreamTarget {
            base_url: route.base_url.clone(),
            model_name: route.model_name.clone(),
            api_key: route.api_key.clone(),
        });
    }

    if let Some((base_url, model_name)) = parse_path_and_model(path) {
        url::Url::parse(&base_url).map_err(|e| ProxyError::InvalidRequest {
            message: format!("Invalid upstream URL in path '{}': {}", base_url, e),
        })?;
        return Ok(UpstreamTarget { base_url, model_name, api_key: client_key.to_string() });
    }

    if !requested_model.is_empty() {
        return Ok(UpstreamTarget {
            base_url: config.default_base_url.clone(),
            model_name: requested_model.to_string(),
            api_key: client_key.to_string(),
        });
    }

    Err(ProxyError::NoRoute { model: requested_model.to_string() })
}
