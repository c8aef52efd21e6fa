//! Game orchestration.
//!
//! Two ways to consume a game, producing identical report sequences for
//! the same seed:
//!
//! - [`run_game`]: a [`Game`] iterator that resolves one war per `next()`
//!   on the caller's thread
//! - [`spawn_game`]: a [`WarStream`] fed by a producer thread through a
//!   single-slot channel

mod orchestrator;
mod stream;

pub use orchestrator::{run_game, Game};
pub use stream::{spawn_game, WarStream, STREAM_CAPACITY};
