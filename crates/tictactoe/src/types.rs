//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Player>> for Cell {
    fn from(player: Option<Player>) -> Self {
        player.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Row-major grid of marks, `None` for empty cells.
///
/// This is the shape a view consumes: `[[null, "X", null], ...]` in JSON.
pub type BoardRows = [[Option<Player>; 3]; 3];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "BoardRows", from = "BoardRows")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns the board as rows of optional marks.
    pub fn rows(&self) -> BoardRows {
        let mut rows = [[None; 3]; 3];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos).player();
        }
        rows
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(player) => result.push_str(&player.to_string()),
                    None => result.push('.'),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<BoardRows> for Board {
    fn from(rows: BoardRows) -> Self {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, rows[pos.row()][pos.col()].into());
        }
        board
    }
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled with no winner.
    Drawn,
}

impl GameStatus {
    /// Returns true once no more moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert!(Position::ALL.iter().all(|&pos| board.is_empty(pos)));
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut board = Board::new();
        board.set(Position::MiddleRight, Cell::Occupied(Player::O));
        let rows = board.rows();
        assert_eq!(rows[1][2], Some(Player::O));
        assert_eq!(rows[2][1], None);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::X));
        board.set(Position::Center, Cell::Occupied(Player::O));
        assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
