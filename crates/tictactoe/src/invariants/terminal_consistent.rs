//! Terminal consistency: the recorded outcome matches the board.

use super::Invariant;
use crate::GameState;
use crate::rules::{check_winner, is_draw};

/// Invariant: `winner` and `is_draw` agree with the board.
///
/// A winner is recorded iff a line is complete, a draw iff the board is
/// full with no line, and never both.
pub struct TerminalConsistentInvariant;

impl Invariant<GameState> for TerminalConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.winner() == check_winner(game.board())
            && game.is_draw() == is_draw(game.board())
            && !(game.winner().is_some() && game.is_draw())
    }

    fn description() -> &'static str {
        "Recorded winner and draw agree with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_new_game_holds() {
        assert!(TerminalConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_unrecorded_win_violates() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.place_mark(row, col);
        }
        assert_eq!(game.winner(), Some(Player::X));
        game.winner = None;
        assert!(!TerminalConsistentInvariant::holds(&game));
    }
}
