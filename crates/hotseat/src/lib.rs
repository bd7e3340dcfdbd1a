//! Hotseat terminal client.
//!
//! A thin adapter over [`hotseat_engine`]: key presses become engine
//! operations and the engine's view becomes a ratatui frame.
//!
//! # Architecture
//!
//! - **Input**: key-to-action mapping and cursor movement
//! - **App**: owns the engine and dispatches actions to it
//! - **UI**: stateless rendering of the app
//! - **Replay**: headless play of a move list
//! - **Logging**: tracing subscriber setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod status;
pub mod tui;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, HotseatConfig};
pub use replay::{ReplayError, replay};
