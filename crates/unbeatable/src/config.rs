//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};
use unbeatable_tictactoe::Player;

/// Configuration for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Mark the human plays. X moves first.
    #[serde(default = "default_human")]
    human: Player,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human() -> Player {
    Player::X
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl PlayConfig {
    /// Creates a configuration.
    pub fn new(human: Player, log_filter: impl Into<String>) -> Self {
        Self {
            human,
            log_filter: log_filter.into(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(file = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!(file = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the human's mark.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(default_human(), default_log_filter())
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(*config.human(), Player::X);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"O\"\nlog_filter = \"debug\"").unwrap();

        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(config, PlayConfig::new(Player::O, "debug"));
    }

    #[test]
    fn test_lowercase_mark() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"o\"").unwrap();

        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.human(), Player::O);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"O\"").unwrap();

        let config = PlayConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlayConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_invalid_file_reports_location() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "human = \"Z\"").unwrap();

        let err = PlayConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_with_human_overrides() {
        let config = PlayConfig::default().with_human(Player::O);
        assert_eq!(*config.human(), Player::O);
    }
}
