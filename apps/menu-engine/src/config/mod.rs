//! Configuration module for the menu engine.
//!
//! Loads YAML configuration with environment variable interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use menu_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("menus in: {}", config.store.data_dir);
//! ```

mod observability;
mod store;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig};
pub use store::StoreConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Menu store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset or empty
/// variables without a default become empty strings.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.store.data_dir.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "store.data_dir must not be empty".to_string(),
        ));
    }

    let level = &config.observability.logging.level;
    if let Err(e) = EnvFilter::try_new(level) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level '{level}' is not a valid filter: {e}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.store.data_dir, "data/menus");
        assert!(config.store.create_missing);
        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
store:
  create_missing: false
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert!(!config.store.create_missing);
        assert_eq!(config.store.data_dir, "data/menus"); // Default value
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r"
store:
  data_dir: /srv/menus
  create_missing: true
observability:
  logging:
    level: menu_engine=debug
    format: json
";

        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.store.data_dir, "/srv/menus");
        assert_eq!(config.observability.logging.level, "menu_engine=debug");
        assert_eq!(config.observability.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "data_dir: ${MENU_ENGINE_CONFIG_TEST_NONEXISTENT_VAR:-data/menus}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "data_dir: data/menus");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "level: ${MENU_ENGINE_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "level: ");
    }

    #[test]
    fn test_validation_empty_data_dir() {
        let yaml = r#"
store:
  data_dir: "  "
"#;

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty data_dir");
        };
        assert!(err.to_string().contains("data_dir"));
    }

    #[test]
    fn test_validation_invalid_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";

        assert!(matches!(
            load_config_from_string(yaml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = load_config(Some("/nonexistent/menu-engine.yaml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }
}
