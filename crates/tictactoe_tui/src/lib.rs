//! Terminal front end for tic-tac-toe.
//!
//! Renders the board with ratatui and forwards mouse clicks and key
//! presses to [`tictactoe::GameState`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Theme, TuiConfig};
pub use input::{digit_position, move_cursor};
pub use terminal::TerminalGuard;
pub use ui::{ScreenLayout, Target, draw};
