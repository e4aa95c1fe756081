//! Configuration loading, validation and persistence.
//!
//! Settings live in a TOML file so the token and default tags survive
//! across runs. `ROYALE_API_TOKEN` overrides the file token, which keeps
//! the secret out of checked-in configs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// API access configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Clash Royale API token (mandatory)
    #[serde(default)]
    pub token: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://api.clashroyale.com/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default player tag for commands run without `--tag`
    #[serde(default)]
    pub player_tag: Option<String>,

    /// Default clan tag for war commands run without `--clan`
    #[serde(default)]
    pub clan_tag: Option<String>,

    #[serde(default)]
    pub api: ApiSettings,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from the file if it exists (defaults otherwise), then apply the
    /// `ROYALE_API_TOKEN` environment override.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        if let Ok(token) = std::env::var("ROYALE_API_TOKEN") {
            if !token.is_empty() {
                config.api.token = token;
            }
        }

        Ok(config)
    }

    /// Save the current settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.token.is_empty() {
            return Err(ConfigError::ValidationError(
                "API token is required: set it in the config file or ROYALE_API_TOKEN".to_string(),
            ));
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "API timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.api.token.is_empty());
        assert_eq!(config.api.base_url, "https://api.clashroyale.com/v1");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.player_tag.is_none());
        assert!(config.clan_tag.is_none());
    }

    #[test]
    fn test_config_validation_missing_token() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_ok() {
        let mut config = AppConfig::default();
        config.api.token = "secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_timeout() {
        let mut config = AppConfig::default();
        config.api.token = "secret".to_string();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_parse_partial_file() {
        let toml_str = r#"
            player_tag = "#2PP"

            [api]
            token = "secret"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.token, "secret");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.player_tag.as_deref(), Some("#2PP"));
        assert!(config.clan_tag.is_none());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = AppConfig {
            player_tag: Some("#2PP".to_string()),
            clan_tag: Some("#9VUPUQJP".to_string()),
            api: ApiSettings {
                token: "secret".to_string(),
                ..Default::default()
            },
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.api.token, "secret");
        assert_eq!(parsed.player_tag.as_deref(), Some("#2PP"));
        assert_eq!(parsed.clan_tag.as_deref(), Some("#9VUPUQJP"));
    }
}
