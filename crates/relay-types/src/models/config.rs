//! Relay server configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RelayConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    #[validate(length(min = 1_u64))]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    #[validate(range(min = 1_u16))]
    pub port: u16,
    /// Upstream TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    #[validate(range(min = 1_u64, max = 600_u64))]
    pub connect_timeout_secs: u64,
    /// Base URL used when neither the keyword route nor the request path picks one
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub default_base_url: String,
    /// Fixed route for models whose name contains a keyword
    #[serde(default)]
    #[validate(nested)]
    pub keyword_route: KeywordRoute,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            connect_timeout_secs: default_connect_timeout(),
            default_base_url: default_base_url(),
            keyword_route: KeywordRoute::default(),
        }
    }
}

impl RelayConfig {
    /// Get the full bind socket address.
    pub fn get_socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Route applied when the requested model name contains `keyword`
/// (case-insensitive). Credentials come from configuration, not the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct KeywordRoute {
    #[serde(default = "default_keyword")]
    #[validate(length(min = 1_u64))]
    pub keyword: String,
    #[serde(default = "default_keyword_model")]
    #[validate(length(min = 1_u64))]
    pub model_name: String,
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for KeywordRoute {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            model_name: default_keyword_model(),
            base_url: default_base_url(),
            api_key: String::new(),
        }
    }
}

impl KeywordRoute {
    pub fn matches(&self, model: &str) -> bool {
        model.to_lowercase().contains(&self.keyword.to_lowercase())
    }
}

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub const fn default_port() -> u16 {
    8787
}

pub const fn default_connect_timeout() -> u64 {
    30
}

pub fn default_base_url() -> String {
    "https://openai.qiniu.com/v1".to_string()
}

fn default_keyword() -> String {
    "haiku".to_string()
}

fn default_keyword_model() -> String {
    "gpt-oss-120b".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RelayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.get_socket_addr(), "0.0.0.0:8787");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: RelayConfig =
            serde_json::from_str(r#"{"port": 9000, "keyword_route": {"api_key": "sk-test"}}"#)
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.keyword_route.keyword, "haiku");
        assert_eq!(config.keyword_route.api_key, "sk-test");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = RelayConfig::default();
        config.keyword_route.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let route = KeywordRoute::default();
        assert!(route.matches("claude-3-5-HAIKU-20241022"));
        assert!(!route.matches("claude-sonnet-4"));
    }
}
