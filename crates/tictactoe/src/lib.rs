//! Tic-tac-toe game logic.
//!
//! [`GameState`] owns a 3x3 [`Board`], whose turn it is, and the outcome.
//! A view forwards clicks to [`GameState::place_mark`] and the reset
//! control to [`GameState::reset`], then renders from the accessors.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.place_mark(row, col);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//! assert_eq!(game.banner(), "Player X wins!");
//!
//! // Finished games ignore further moves until reset.
//! assert!(!game.place_mark(2, 2));
//! game.reset();
//! assert!(game.place_mark(2, 2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, Placement};
pub use game::{GameState, InvalidState};
pub use position::Position;
pub use types::{Board, BoardRows, Cell, GameStatus, Player};
