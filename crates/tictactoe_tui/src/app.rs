//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use tictactoe::{GameState, Position};
use tracing::{debug, instrument};

use crate::input::{digit_position, move_cursor};
use crate::ui::{ScreenLayout, Target};

/// Main application state.
///
/// Owns the one [`GameState`] and turns key presses and clicks into
/// `place_mark` / `reset` calls.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell the keyboard cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.place(pos);
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
    }

    /// Handles a left click at terminal cell `(column, row)` on a screen of size `area`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) {
        match ScreenLayout::new(area).hit(column, row) {
            Some(Target::Cell(pos)) => self.place(pos),
            Some(Target::Reset) => self.restart(),
            None => debug!("Click outside controls"),
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }

    fn place(&mut self, pos: Position) {
        if self.game.place_mark(pos.row(), pos.col()) {
            debug!(position = %pos, banner = %self.game.banner(), "Move applied to UI state");
            self.cursor = pos;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
