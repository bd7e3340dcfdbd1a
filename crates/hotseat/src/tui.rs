//! Terminal setup and the event loop.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument, warn};

use crate::app::App;
use crate::config::HotseatConfig;
use crate::ui;

/// Runs a cleanup action when dropped, including while unwinding from a
/// panic.
pub struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            restore();
        }
    }
}

/// Leaves raw mode and the alternate screen, and shows the cursor.
fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run(config: HotseatConfig) -> Result<()> {
    info!("Starting hotseat TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = RestoreGuard::new(restore_terminal);

    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    if let Err(e) = &res {
        error!(error = %e, "Event loop failed");
    }
    info!(games = app.view().score.games_played(), "Exiting hotseat TUI");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = app.config().tick_rate();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }
    }
}
