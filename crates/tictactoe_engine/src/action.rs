//! Moves and the result of applying them.

use super::{Board, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a selection was silently ignored.
///
/// Ignored selections leave board and turn untouched. They are policy, not
/// errors, so they never travel through `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Ignored {
    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),
    /// The board already has a terminal outcome.
    #[display("game is already over ({_0})")]
    GameOver(Outcome),
}

/// Result of a cell selection that passed bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The mark was placed and the turn passed to the opponent.
    Accepted {
        /// The move that was applied.
        action: Move,
        /// Board after the move.
        board: Board,
        /// Outcome of the new board.
        outcome: Outcome,
    },
    /// Nothing changed.
    Ignored(Ignored),
}

impl MoveResult {
    /// Returns true if the move changed the board.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// Outcome reported by an accepted move; ignored moves report none.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Accepted { outcome, .. } => Some(*outcome),
            MoveResult::Ignored(_) => None,
        }
    }
}
