//! Mark count invariant: the board holds exactly the moves that were played.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: non-empty cells correspond one-to-one with move history.
///
/// The number of marks equals the number of accepted moves, and every
/// history entry's cell holds that entry's player.
pub struct MarkCountInvariant;

impl Invariant<GameState> for MarkCountInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        game.board().occupied_count() == history.len()
            && history
                .iter()
                .all(|m| game.board().get(m.position) == Cell::Occupied(m.player))
    }

    fn description() -> &'static str {
        "Every mark on the board comes from exactly one recorded move"
    }
}
