//! Typed error definitions for Claude Relay.
//!
//! Errors are serializable for API responses, displayable for logs, and
//! matchable for status mapping.

mod config;
mod proxy;

pub use config::ConfigError;
pub use proxy::ProxyError;
