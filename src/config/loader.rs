//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::validate_config;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(|errors| {
        ConfigError::Validation(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<GatewayConfig, ConfigError> {
        let config: GatewayConfig = toml::from_str(content)?;
        validate_config(&config).map_err(|errors| {
            ConfigError::Validation(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })?;
        Ok(config)
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = parse("").unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.auth.upstream_url, "http://127.0.0.1:9099");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse(
            r#"
            [listener]
            bind_address = "127.0.0.1:3000"

            [auth]
            upstream_url = "http://auth.internal:4000"

            [timeouts]
            request_secs = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(config.auth.upstream_url, "http://auth.internal:4000");
        assert_eq!(config.timeouts.request_secs, 10);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let error = parse("[listener\nbind_address = 3").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn semantic_failures_are_validation_errors() {
        let error = parse(
            r#"
            [auth]
            upstream_url = "not a url"
            "#,
        )
        .unwrap_err();

        assert!(matches!(error, ConfigError::Validation(_)));
    }
}
