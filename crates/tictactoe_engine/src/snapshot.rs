//! Host-facing view of the game.
//!
//! A [`Snapshot`] is what a presentation layer needs after every input: the
//! contents of each cell and the outcome. It serializes as
//! `{"board": ["empty", "A", ...], "outcome": "none"}` where `A` is the first
//! mover (X) and `B` the second (O).

use super::{Board, Cell, Engine, Mark, Outcome, types::CELL_COUNT};
use serde::{Deserialize, Serialize};

/// Contents of one cell as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellView {
    /// No mark.
    #[serde(rename = "empty")]
    Empty,
    /// First mover's mark (X).
    A,
    /// Second mover's mark (O).
    B,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => CellView::Empty,
            Cell::Occupied(Mark::X) => CellView::A,
            Cell::Occupied(Mark::O) => CellView::B,
        }
    }
}

/// Outcome as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeView {
    /// Game still running.
    #[serde(rename = "none")]
    None,
    /// X completed a triple.
    #[serde(rename = "winA")]
    WinA,
    /// O completed a triple.
    #[serde(rename = "winB")]
    WinB,
    /// Full board, no winner.
    #[serde(rename = "draw")]
    Draw,
}

impl From<Outcome> for OutcomeView {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Ongoing => OutcomeView::None,
            Outcome::Win(Mark::X) => OutcomeView::WinA,
            Outcome::Win(Mark::O) => OutcomeView::WinB,
            Outcome::Draw => OutcomeView::Draw,
        }
    }
}

/// Board contents plus outcome, produced after every host call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub board: [CellView; CELL_COUNT],
    /// Outcome of `board`.
    pub outcome: OutcomeView,
}

impl Snapshot {
    /// Builds a snapshot of an arbitrary board.
    pub fn of_board(board: &Board) -> Self {
        Self {
            board: (*board.cells()).map(CellView::from),
            outcome: super::rules::outcome(board).into(),
        }
    }
}

impl From<&Engine> for Snapshot {
    fn from(engine: &Engine) -> Self {
        Self::of_board(engine.board())
    }
}
