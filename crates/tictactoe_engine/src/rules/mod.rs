//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from the
//! engine's state so that any board, however it was produced, classifies
//! the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board: a win takes precedence over a full board.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
