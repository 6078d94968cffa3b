//! Configuration models for Claude Relay.

mod config;

pub use config::{
    default_base_url, default_connect_timeout, default_host, default_port, KeywordRoute,
    RelayConfig,
};
