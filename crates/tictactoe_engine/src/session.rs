//! Host call surface.
//!
//! A [`Session`] couples an [`Engine`] with the presentation layer that
//! hosts it. The host forwards cell selections and resets; the session
//! answers every call with a [`Snapshot`] and tells the host, through its
//! [`OutcomeObserver`], when a move ends the game. What the host does next
//! (show a dialog, ask to play again, call [`Session::reset`]) is up to it.

use super::action::MoveResult;
use super::error::EngineError;
use super::{Engine, Mark, Outcome, Snapshot};
use tracing::{debug, instrument};

/// Receives terminal outcomes from a [`Session`].
///
/// Each method fires at most once per game: only the move that ends the
/// game triggers it, and ignored selections afterwards stay silent.
pub trait OutcomeObserver {
    /// `mark` completed a triple.
    fn on_win(&mut self, mark: Mark);

    /// The board filled up without a winner.
    fn on_draw(&mut self);
}

/// Observer for hosts that only poll snapshots.
impl OutcomeObserver for () {
    fn on_win(&mut self, _mark: Mark) {}

    fn on_draw(&mut self) {}
}

/// An engine bound to the host that displays it.
#[derive(Debug)]
pub struct Session<O> {
    engine: Engine,
    observer: O,
}

impl<O: OutcomeObserver> Session<O> {
    /// Starts a new game reporting to `observer`.
    pub fn new(observer: O) -> Self {
        Self {
            engine: Engine::new(),
            observer,
        }
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Current cell contents and outcome.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.engine)
    }

    /// Forwards a cell selection to the engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] for an index outside `0..=8`;
    /// the game is unchanged.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<Snapshot, EngineError> {
        match self.engine.apply_move(index)? {
            MoveResult::Accepted { outcome, .. } => match outcome {
                Outcome::Win(mark) => self.observer.on_win(mark),
                Outcome::Draw => self.observer.on_draw(),
                Outcome::Ongoing => {}
            },
            MoveResult::Ignored(reason) => debug!(%reason, "Selection had no effect"),
        }
        Ok(self.snapshot())
    }

    /// Starts over and returns the initial snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        self.engine.reset();
        self.snapshot()
    }

    /// Consumes the session, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl Default for Session<()> {
    fn default() -> Self {
        Self::new(())
    }
}
