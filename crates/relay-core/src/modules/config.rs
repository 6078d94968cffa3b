use relay_types::{ConfigError, RelayConfig};
use std::fs;
use std::path::Path;
use validator::Validate;

use crate::error::AppResult;

/// Load relay configuration.
///
/// With no path the built-in defaults are used. A path that does not exist is
/// an error, since it was asked for explicitly. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> AppResult<RelayConfig> {
    let config = match path {
        None => RelayConfig::default(),
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound { path: p.display().to_string() }.into());
            }
            let content = fs::read_to_string(p)?;
            serde_json::from_str::<RelayConfig>(&content)
                .map_err(|e| ConfigError::from_json_error(&e))?
        },
    };

    validate_config(&config)?;
    tracing::debug!("Loaded relay config: {}", config.get_socket_addr());
    Ok(config)
}

/// Validate a config assembled from file + CLI overrides.
pub fn validate_config(config: &RelayConfig) -> AppResult<()> {
    config.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Write;

    #[test]
    fn test_load_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"port": 9100, "keyword_route": {{"keyword": "mini", "model_name": "qwen3"}}}}"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.keyword_route.keyword, "mini");
        assert_eq!(config.keyword_route.model_name, "qwen3");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.json")));
        assert!(matches!(result, Err(AppError::Config(ConfigError::NotFound { .. }))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(AppError::Config(ConfigError::ParseError { .. }))));
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_base_url": "nope"}}"#).unwrap();

        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(AppError::Config(ConfigError::ValidationError { .. }))));
    }
}
