// Rust guideline compliant 2026-10-19

//! Configuration management for the canary resolver.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "canary.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON envelope output.
    Json,
    /// The bare config ID.
    #[default]
    Plain,
}

/// Configuration for resolver behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the catalog snapshot file.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file to write logs to instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("canary-configs.jsonl")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<config_dir>/canary.toml`
    /// 3. Environment variables with `CANARY_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `canary.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `CANARY_CATALOG_PATH` - Catalog snapshot path
    /// - `CANARY_OUTPUT_FORMAT` - Output format (json/plain)
    /// - `CANARY_LOG_LEVEL` - Maximum log level
    /// - `CANARY_LOG_FILE` - Log file path
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("CANARY_CATALOG_PATH") {
            self.catalog_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("CANARY_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "CANARY_OUTPUT_FORMAT must be json or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("CANARY_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("CANARY_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - catalog_path is empty
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "catalog_path cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<config_dir>/canary.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
