//! Card model and decks.
//!
//! ## Key Types
//!
//! - `Card`: Rank and suit packed into one byte
//! - `Rank`, `Suit`: Card components; only rank affects ordering
//! - `Deck`: Ordered pile dealt from the top and refilled at the bottom

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, STANDARD_DECK_SIZE};
