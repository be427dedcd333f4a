//! Errors reported by checked deck construction.

use thiserror::Error;

/// Why a pair of range endpoints could not be turned into a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The two endpoints walk different buffers.
    #[error("range endpoints belong to different buffers")]
    ForeignEndpoints,

    /// The end endpoint lies before the begin endpoint.
    #[error("range end lies {overshoot} position(s) before range begin")]
    InvertedRange {
        /// Distance from `end` forward to `begin`.
        overshoot: usize,
    },
}
