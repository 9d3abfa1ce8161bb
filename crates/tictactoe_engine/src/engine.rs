//! Tic-tac-toe game engine.

use super::action::{Move, MoveResult};
use super::contracts::{Contract, MoveContract};
use super::error::EngineError;
use super::{Board, Cell, Mark, Outcome, Position, rules};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board and whose turn it is. Everything else, including the
/// outcome, is derived from the board on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
}

impl Engine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Builds a fresh game and applies `indices` in order.
    ///
    /// Ignored selections are skipped like in live play. Stops at the first
    /// out-of-range index.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for &index in indices {
            engine.apply_move(index)?;
        }
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Outcome of the current board.
    pub fn current_outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_outcome().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current turn's mark at `index` (0-8).
    ///
    /// An occupied cell or a finished game leaves the state untouched and
    /// yields [`MoveResult::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index` is outside `0..=8`.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult, EngineError> {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Rejected out-of-range cell index");
            return Err(EngineError::InvalidIndex { index });
        };

        if let Err(reason) = MoveContract::pre(self, &position) {
            debug!(%reason, "Selection ignored");
            return Ok(MoveResult::Ignored(reason));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let action = Move::new(self.turn, position);
        self.board.set(position, Cell::Occupied(self.turn));
        self.turn = self.turn.opponent();

        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(&before, self) {
            panic!("Move broke engine invariants: {violation}");
        }

        let outcome = rules::outcome(&self.board);
        debug!(%action, ?outcome, "Move applied");
        if outcome.is_terminal() {
            info!(%outcome, board = %self.board, "Game finished");
        }

        Ok(MoveResult::Accepted {
            action,
            board: self.board,
            outcome,
        })
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        info!("Game reset");
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
