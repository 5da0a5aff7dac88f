// Rust guideline compliant 2026-02-06

//! Tool configuration for hookreg.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file, relative to the project root.
const CONFIG_FILE: &str = ".hookreg.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for hookreg behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Manifest filename, relative to the project root.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether mutable revision pins are acceptable (downgrades the doctor warning).
    #[serde(default)]
    pub allow_mutable_revs: bool,
}

/// Default manifest filename.
fn default_manifest_file() -> String {
    "hooks.toml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_file: default_manifest_file(),
            output_format: OutputFormat::default(),
            allow_mutable_revs: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.hookreg.toml`
    /// 3. Environment variables with `HOOKREG_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Path to the project root
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let file_config: Config = toml::from_str(&content).map_err(|e| {
                crate::Error::MalformedConfig(format!("Invalid config file: {}", e))
            })?;
            config = file_config;
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `HOOKREG_MANIFEST_FILE` - Manifest filename
    /// - `HOOKREG_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `HOOKREG_ALLOW_MUTABLE_REVS` - Accept mutable revision pins (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("HOOKREG_MANIFEST_FILE") {
            self.manifest_file = val;
        }

        if let Ok(val) = std::env::var("HOOKREG_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::MalformedConfig(
                        "HOOKREG_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("HOOKREG_ALLOW_MUTABLE_REVS") {
            self.allow_mutable_revs = val.parse().map_err(|_| {
                crate::Error::MalformedConfig(
                    "HOOKREG_ALLOW_MUTABLE_REVS must be true or false".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest filename is empty.
    fn validate(&self) -> Result<()> {
        if self.manifest_file.trim().is_empty() {
            return Err(crate::Error::MalformedConfig(
                "manifest_file cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `.hookreg.toml`.
    ///
    /// # Arguments
    ///
    /// * `dir` - Path to the project root
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::MalformedConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
