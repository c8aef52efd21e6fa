//! # rust-war
//!
//! A deterministic simulator for the two-player card game War.
//!
//! ## Rules
//!
//! A shuffled 52-card deck is split between two players. Each battle both
//! players reveal their top card; the higher rank takes every card played.
//! On a tie each player adds three cards face down and battles again, until
//! someone wins or a hand runs dry.
//!
//! ## Design Principles
//!
//! 1. **Explicit Randomness**: Every shuffle takes the generator as a
//!    parameter. The same seed replays the same game.
//!
//! 2. **Errors as Values**: Broken preconditions (dealing from an empty
//!    deck, splitting an odd deck) are `WarError`s, not aborts.
//!
//! 3. **Lazy Results**: Games are consumed one war at a time, either
//!    pulled from a `Game` iterator or pushed from a producer thread.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, errors
//! - `cards`: Card encoding and decks
//! - `war`: Battle and war resolution
//! - `game`: Game orchestration and report streaming

pub mod core;
pub mod cards;
pub mod war;
pub mod game;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, PlayerId, PlayerPair, Result, WarError};

pub use crate::cards::{Card, Deck, Rank, Suit, STANDARD_DECK_SIZE};

pub use crate::war::{
    run_battle, run_war,
    BattleReport, Hands, Outcome,
    WarReport, WarState, ESCALATION_CARDS,
};

pub use crate::game::{run_game, spawn_game, Game, WarStream, STREAM_CAPACITY};
