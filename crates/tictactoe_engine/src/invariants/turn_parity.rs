//! Turn parity invariant: the turn follows from the board.

use super::super::{Engine, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: it is X's turn exactly when both marks have been placed
/// equally often.
pub struct TurnParityInvariant;

impl Invariant<Engine> for TurnParityInvariant {
    fn holds(engine: &Engine) -> bool {
        let x_count = engine.board().count(Mark::X);
        let o_count = engine.board().count(Mark::O);
        let expected = if x_count == o_count { Mark::X } else { Mark::O };

        let valid = engine.turn() == expected;
        if !valid {
            warn!(x_count, o_count, turn = %engine.turn(), "Turn parity violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Turn is X when marks are balanced, O otherwise"
    }
}
