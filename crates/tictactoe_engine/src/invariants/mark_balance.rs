//! Mark balance invariant: X leads O by zero or one mark.

use super::super::{Engine, Mark};
use super::Invariant;
use tracing::warn;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and marks strictly alternate.
pub struct MarkBalanceInvariant;

impl Invariant<Engine> for MarkBalanceInvariant {
    fn holds(engine: &Engine) -> bool {
        let x_count = engine.board().count(Mark::X);
        let o_count = engine.board().count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MarkBalanceInvariant::holds(&Engine::new()));
    }

    #[test]
    fn test_holds_through_full_game() {
        let mut engine = Engine::new();
        for index in [0, 1, 2, 3, 4, 5, 7, 6, 8] {
            engine.apply_move(index).expect("in range");
            assert!(MarkBalanceInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_two_extra_x_violates() {
        let mut engine = Engine::new();
        engine.board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        engine.board.set(Position::Center, Cell::Occupied(Mark::X));
        assert!(!MarkBalanceInvariant::holds(&engine));
    }
}
