//! Moves, their outcomes, and the reasons a move is refused.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Play continues; the given player moves next.
    Continue(Player),
    /// The mover completed a line.
    Won(Player),
    /// The board filled with no line completed.
    Drawn,
}

/// Reason a move was refused.
///
/// The state is never touched when a move is refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,
}
