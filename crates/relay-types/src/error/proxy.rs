//! Proxy-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while relaying a request.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ProxyError {
    /// Client request could not be parsed or is unusable
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Path is not a messages endpoint
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// No upstream could be resolved for the request
    #[error("Could not determine upstream target for model: {model}")]
    NoRoute { model: String },

    /// Upstream provider is unreachable (connect error, reset, etc)
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable { message: String },

    /// Upstream answered 2xx but the body violates the ChatCompletions contract
    #[error("Upstream returned malformed output: {message}")]
    UpstreamContract { message: String },

    /// Stream error during SSE transmission
    #[error("Stream error: {message}")]
    StreamError { message: String },
}

impl ProxyError {
    /// Check if this is a client error (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. } | Self::NotFound { .. } | Self::NoRoute { .. })
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } | Self::NoRoute { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::UpstreamUnavailable { .. }
            | Self::UpstreamContract { .. }
            | Self::StreamError { .. } => 502,
        }
    }

    /// Anthropic-style error type string used in error envelopes.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest { .. } | Self::NoRoute { .. } => "invalid_request_error",
            Self::NotFound { .. } => "not_found_error",
            Self::UpstreamUnavailable { .. } | Self::StreamError { .. } => "overloaded_error",
            Self::UpstreamContract { .. } => "api_error",
        }
    }
}
