//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tictactoe_tui::{App, Cli, TerminalGuard, Theme, TuiConfig, draw};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    let theme = config.theme()?;

    init_tracing(config.log_file())?;
    match config.source() {
        Some(path) => info!(path = %path.display(), "Loaded config file"),
        None => info!("No config file, using defaults"),
    }
    info!(?config, "Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, &theme);

    drop(terminal);
    guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Sends tracing output to `path` so it does not draw over the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draw, wait for input, dispatch; until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Term, app: &mut App, theme: &Theme) -> Result<()> {
    loop {
        let area = terminal.draw(|f| draw(f, app, theme))?.area;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(area, mouse.column, mouse.row)
            }
            _ => {}
        }
    }
}
