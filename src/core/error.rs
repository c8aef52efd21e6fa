//! Error type shared by the card model, the resolvers and the game stream.
//!
//! Every variant is a broken precondition rather than a recoverable runtime
//! condition: given a standard deck the engine never produces one. They are
//! surfaced as values so callers and tests can assert on them.

use thiserror::Error;

/// Errors raised by the War engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WarError {
    /// A card was dealt from a deck with no cards left.
    #[error("dealt from empty deck")]
    EmptyDeck,

    /// A deck of odd length was asked to split into two equal halves.
    #[error("tried to split unevenly sized deck of {len} cards")]
    OddSplit {
        /// Length of the deck that was split.
        len: usize,
    },

    /// A packed card code does not name one of the 52 standard cards.
    #[error("invalid card code {0:#04x}")]
    InvalidCardCode(u8),

    /// The simulation thread panicked before closing the stream.
    #[error("game producer terminated abnormally")]
    ProducerPanicked,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, WarError>;
