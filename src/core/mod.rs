//! Core engine types: players, RNG, errors.
//!
//! These are the game-agnostic building blocks the card model, resolvers
//! and orchestrator are written against.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{Result, WarError};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
