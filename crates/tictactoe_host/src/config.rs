//! Host configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// Settings for the terminal host, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// Symbol drawn for X.
    #[serde(default = "default_x_symbol")]
    x_symbol: String,

    /// Symbol drawn for O.
    #[serde(default = "default_o_symbol")]
    o_symbol: String,

    /// Ask "Play again?" after a finished game instead of restarting.
    #[serde(default = "default_prompt_play_again")]
    prompt_play_again: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_symbol() -> String {
    "X".to_string()
}

fn default_o_symbol() -> String {
    "O".to_string()
}

fn default_prompt_play_again() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
            prompt_play_again: default_prompt_play_again(),
            log_filter: default_log_filter(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Symbol for `mark`.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_symbol,
            Mark::O => &self.o_symbol,
        }
    }

    /// Overrides the play-again prompt setting.
    pub fn with_prompt_play_again(mut self, prompt: bool) -> Self {
        self.prompt_play_again = prompt;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.x_symbol.trim().is_empty() || self.o_symbol.trim().is_empty() {
            return Err(ConfigError::new("Mark symbols must not be blank".to_string()));
        }
        if self.x_symbol == self.o_symbol {
            return Err(ConfigError::new(format!(
                "X and O need distinct symbols, both are {:?}",
                self.x_symbol
            )));
        }
        Ok(())
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
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("tictactoe.toml");
        fs::write(&path, content).expect("Failed to write TOML");
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = HostConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.symbol(Mark::X), "X");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(&dir, "o_symbol = \"@\"\nprompt_play_again = false\n");

        let config = HostConfig::from_file(path).expect("valid config");

        assert_eq!(config.symbol(Mark::X), "X");
        assert_eq!(config.symbol(Mark::O), "@");
        assert!(!config.prompt_play_again());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(&dir, "this is not valid toml !!!@@@");

        let err = HostConfig::load_or_default(path).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_identical_symbols_rejected() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_config(&dir, "x_symbol = \"#\"\no_symbol = \"#\"\n");

        let err = HostConfig::from_file(path).unwrap_err();
        assert!(err.message.contains("distinct"));
    }
}
