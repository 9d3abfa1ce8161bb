//! Engine error types.

use derive_more::{Display, Error};

/// Error returned by the engine's call surface.
///
/// Occupied cells and finished games are not errors; see
/// [`Ignored`](crate::Ignored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// The selected index is outside `0..=8`.
    #[display("Invalid cell index {index} (must be 0-8)")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
    },
}
