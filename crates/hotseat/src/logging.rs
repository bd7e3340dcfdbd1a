//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::HotseatConfig;

/// Sends logs to the configured file so the TUI keeps the terminal.
pub fn init_file(config: &HotseatConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Sends warnings and errors to stderr, keeping stdout for command output.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Records where the configuration came from.
///
/// Called once a subscriber is installed, since the config has to be read
/// before the subscriber can be built.
pub fn log_config(path: &Path, config: &HotseatConfig) {
    if path.exists() {
        info!(path = %path.display(), ?config, "Config loaded");
    } else {
        info!(path = %path.display(), ?config, "No config file, using defaults");
    }
}
