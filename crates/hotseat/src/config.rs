//! User configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use hotseat_engine::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

/// Display and runtime settings for the terminal client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HotseatConfig {
    /// Name shown for the player using X.
    player_x_name: String,

    /// Name shown for the player using O.
    player_o_name: String,

    /// File that receives log output while the UI owns the terminal.
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// How long to wait for a key event before redrawing, in milliseconds.
    tick_rate_ms: u64,
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            player_x_name: "X".to_string(),
            player_o_name: "O".to_string(),
            log_file: PathBuf::from("hotseat.log"),
            log_filter: "info".to_string(),
            tick_rate_ms: 100,
        }
    }
}

impl HotseatConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; unset keys fall back to their
    /// default values. Runs before any subscriber exists, so the outcome is
    /// logged by [`crate::logging::log_config`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than 0"));
        }
        Ok(config)
    }

    /// Display name for `player`.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    /// Poll interval for the event loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
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
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HotseatConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, HotseatConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player_x_name = \"Ada\"").unwrap();
        writeln!(file, "tick_rate_ms = 50").unwrap();

        let config = HotseatConfig::load(file.path()).unwrap();
        assert_eq!(config.player_name(Player::X), "Ada");
        assert_eq!(config.player_name(Player::O), "O");
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms = \"fast\"").unwrap();

        let err = HotseatConfig::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = HotseatConfig::from_toml("tick_rate_ms = 0").unwrap_err();
        assert_eq!(err.message, "tick_rate_ms must be greater than 0");
        assert!(err.to_string().contains("config.rs"));
    }
}
