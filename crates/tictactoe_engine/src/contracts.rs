//! Move preconditions and postconditions.
//!
//! A precondition failure is not an error: the engine turns it into an
//! [`Ignored`] result and leaves its state alone. Postconditions are the
//! engine invariants and only fail on a bug.

use super::action::Ignored;
use super::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use super::{Engine, Position, rules};
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Ignored>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

/// Precondition: the board has no terminal outcome yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with the current outcome when the game is over.
    #[instrument(skip(engine))]
    pub fn check(engine: &Engine) -> Result<(), Ignored> {
        let outcome = rules::outcome(engine.board());
        if outcome.is_terminal() {
            Err(Ignored::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the selected cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails when `position` already holds a mark.
    #[instrument(skip(engine))]
    pub fn check(position: Position, engine: &Engine) -> Result<(), Ignored> {
        if engine.board().is_empty(position) {
            Ok(())
        } else {
            Err(Ignored::CellOccupied(position))
        }
    }
}

/// Composite precondition: the game is still on and the cell is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions; a finished game is reported first.
    #[instrument(skip(engine))]
    pub fn check(position: Position, engine: &Engine) -> Result<(), Ignored> {
        GameNotOver::check(engine)?;
        CellIsEmpty::check(position, engine)?;
        Ok(())
    }
}

/// Contract for placing the current turn's mark.
pub struct MoveContract;

impl Contract<Engine, Position> for MoveContract {
    fn pre(engine: &Engine, position: &Position) -> Result<(), Ignored> {
        LegalMove::check(*position, engine)
    }

    fn post(before: &Engine, after: &Engine) -> Result<(), InvariantViolation> {
        let placed = after.board().cells().iter().filter(|c| c.mark().is_some()).count();
        let previously = before.board().cells().iter().filter(|c| c.mark().is_some()).count();
        if placed != previously + 1 {
            return Err(InvariantViolation::new(format!(
                "Expected exactly one new mark, board went from {previously} to {placed}"
            )));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}
