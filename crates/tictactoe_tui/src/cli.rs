//! Command-line interface for the tic-tac-toe terminal UI.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal. Click a cell or use the keyboard.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file. Defaults to ./tictactoe.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path, overriding the config file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
