//! The game state a view owns: board, turn, and outcome.

use crate::action::{Move, MoveError, Placement};
use crate::rules::{self, Line};
use crate::types::{Board, Cell, GameStatus, Player};
use crate::{Position, invariants};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete tic-tac-toe game state.
///
/// Mutated only through [`place_mark`](Self::place_mark) /
/// [`try_place`](Self::try_place) and replaced wholesale by
/// [`reset`](Self::reset). Once there is a winner or a draw, moves are
/// refused until reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) winner: Option<Player>,
    pub(crate) is_draw: bool,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: None,
            is_draw: false,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns `false` and leaves the state untouched if the game is over,
    /// the cell is taken, or the coordinates are off the board.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> bool {
        let result = Position::from_row_col(row, col)
            .ok_or(MoveError::OutOfRange { row, col })
            .and_then(|pos| self.try_place(pos));

        match result {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                false
            }
        }
    }

    /// Places the current player's mark at `pos`, reporting why a move
    /// was refused.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has a winner or is drawn,
    /// [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place(&mut self, pos: Position) -> Result<Placement, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Cell::Occupied(player));
        self.history.push(Move::new(player, pos));

        let placement = if rules::check_winner(&self.board).is_some() {
            // Only the mover's mark changed, so any completed line is theirs.
            self.winner = Some(player);
            info!(winner = %player, moves = self.history.len(), "Game won");
            Placement::Won(player)
        } else if rules::is_full(&self.board) {
            self.is_draw = true;
            info!("Game drawn");
            Placement::Drawn
        } else {
            self.current_player = player.opponent();
            debug!(next = %self.current_player, "Turn passed");
            Placement::Continue(self.current_player)
        };

        debug_assert!(
            invariants::check_game(self).is_ok(),
            "Invariant violation: {:?}",
            invariants::check_game(self)
        );

        Ok(placement)
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// Plays `positions` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first refusal; moves after it are not attempted.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in positions {
            game.try_place(pos)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is, or who made the final move once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True when the board filled without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True once no further moves are accepted.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Drawn,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// Returns the accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty cells in row-major order; none once the game is over.
    pub fn available_positions(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board).map(|(line, _)| line)
    }

    /// One-line status text for a view.
    pub fn banner(&self) -> String {
        match self.status() {
            GameStatus::Won(player) => format!("Player {player} wins!"),
            GameStatus::Drawn => "Draw".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
        }
    }
}

/// Unchecked field layout of [`GameState`], as read from serialized input.
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    is_draw: bool,
    history: Vec<Move>,
}

/// Deserialized state that no sequence of moves could produce.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Inconsistent game state: {_0}")]
pub struct InvalidState(#[error(not(source))] pub String);

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            current_player: raw.current_player,
            winner: raw.winner,
            is_draw: raw.is_draw,
            history: raw.history,
        };
        invariants::check_game(&state).map_err(InvalidState)?;

        // Only states reachable by play are accepted.
        let positions: Vec<Position> = state.history.iter().map(|m| m.position).collect();
        let replayed = Self::replay(&positions)
            .map_err(|e| InvalidState(format!("history does not replay: {e}")))?;
        if replayed != state {
            return Err(InvalidState(
                "recorded fields disagree with the replayed history".to_string(),
            ));
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
