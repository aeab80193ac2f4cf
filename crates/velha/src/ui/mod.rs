//! Terminal game client.

mod app;
mod input;
mod modal;
mod render;

pub use app::{App, Focus};
pub use input::move_cursor;
pub use modal::{Modal, ModalField, ModalKind};

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::client::{MatchStore, RestClient};
use crate::config::AppConfig;

/// Runs the game client against the configured server until the player quits.
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    // Log to a file so output does not tear the screen
    let log_file = std::fs::File::create(config.tui_log_file())
        .with_context(|| format!("Failed to create log file {}", config.tui_log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %config.server_url(), "Starting velha client");
    let store = RestClient::new(config.server_url().clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &store).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Client loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    store: &dyn MatchStore,
) -> Result<()> {
    let mut app = App::new();
    app.refresh_history(store).await;

    loop {
        terminal.draw(|f| render::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                app.handle_key(key, store).await;
            }
        }

        if app.should_quit() {
            info!("Player quit");
            return Ok(());
        }
    }
}
