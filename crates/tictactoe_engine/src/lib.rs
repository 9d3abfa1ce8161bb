//! Tic-tac-toe game engine.
//!
//! Pure, synchronous game logic for two local players sharing one board.
//!
//! # Architecture
//!
//! - **Engine**: owns the board and the turn, applies moves, resets
//! - **Rules**: classifies any board as ongoing, won or drawn
//! - **Contracts/Invariants**: move preconditions and the properties every
//!   reachable state satisfies
//! - **Session**: the call surface a presentation layer talks to
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, Mark, Outcome};
//!
//! let mut engine = Engine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index)?;
//! }
//! assert_eq!(engine.current_outcome(), Outcome::Win(Mark::X));
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod outcome;
mod position;
mod session;
mod snapshot;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Ignored, Move, MoveResult};
pub use engine::Engine;
pub use error::EngineError;
pub use outcome::Outcome;
pub use position::Position;
pub use session::{OutcomeObserver, Session};
pub use snapshot::{CellView, OutcomeView, Snapshot};
pub use types::{Board, CELL_COUNT, Cell, Mark};
