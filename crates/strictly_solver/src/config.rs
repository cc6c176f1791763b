//! Solver configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the interactive solver.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Position loaded at startup when none is given on the command line.
    #[serde(default = "default_start_position")]
    start_position: String,

    /// Prompt printed before each command.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// Tracing filter used when neither `--log` nor `RUST_LOG` is set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Pretty-print the output of the `json` command.
    #[serde(default)]
    json_pretty: bool,
}

#[instrument]
fn default_start_position() -> String {
    ".........".to_string()
}

#[instrument]
fn default_prompt() -> String {
    "solver :: ".to_string()
}

#[instrument]
fn default_log_filter() -> String {
    "warn,strictly_tablebase=info".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            start_position: default_start_position(),
            prompt: default_prompt(),
            log_filter: default_log_filter(),
            json_pretty: false,
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(start_position = %config.start_position, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SolverConfig = toml::from_str("").unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: SolverConfig = toml::from_str("prompt = \"> \"\njson_pretty = true").unwrap();
        assert_eq!(config.prompt(), "> ");
        assert!(*config.json_pretty());
        assert_eq!(config.start_position(), ".........");
    }
}
