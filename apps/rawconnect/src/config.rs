//! # Console Configuration
//!
//! Settings for the RawConnect console.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RAWCONNECT_MARKET_NAME=RawConnect Pune                             │
//! │     RAWCONNECT_LOG=debug                                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH> or RAWCONNECT_CONFIG                               │
//! │     ~/.config/rawconnect/rawconnect.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [market]
//! name = "RawConnect"
//!
//! [logging]
//! filter = "warn,rawconnect=info"
//!
//! [console]
//! pretty = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

use rawconnect_core::BRAND_NAME;

/// Config loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Sections
// =============================================================================

/// Marketplace identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Brand shown in the navigation bar.
    #[serde(default = "default_market_name")]
    pub name: String,
}

fn default_market_name() -> String {
    BRAND_NAME.to_string()
}

impl Default for MarketConfig {
    fn default() -> Self {
        MarketConfig {
            name: default_market_name(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn,rawconnect=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Pretty-print JSON responses.
    #[serde(default)]
    pub pretty: bool,
}

// =============================================================================
// App Config
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub market: MarketConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub console: ConsoleConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (rawconnect.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.market.name.trim().is_empty() {
            return Err(ConfigError::Invalid("market.name must not be empty".into()));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("RAWCONNECT_MARKET_NAME") {
            debug!(name = %name, "Overriding market name from environment");
            self.market.name = name;
        }

        if let Ok(filter) = std::env::var("RAWCONNECT_LOG") {
            self.logging.filter = filter;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rawconnect", "rawconnect")
            .map(|dirs| dirs.config_dir().join("rawconnect.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.market.name, "RawConnect");
        assert_eq!(config.logging.filter, "warn,rawconnect=info");
        assert!(!config.console.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[console]\npretty = true\n").unwrap();
        assert!(config.console.pretty);
        assert_eq!(config.market.name, "RawConnect");

        let config = AppConfig::from_toml("[market]\nname = \"Bazaar\"\n").unwrap();
        assert_eq!(config.market.name, "Bazaar");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(matches!(
            AppConfig::from_toml("[market\nname ="),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.market.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains("[market]"));
        assert!(toml_str.contains("[logging]"));
    }
}
