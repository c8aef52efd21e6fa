//! Battle and war resolution.
//!
//! - `battle`: one card-reveal exchange between the two hands
//! - `resolver`: a full war, escalating through ties until a battle is won
//!   or a hand runs out

pub mod battle;
pub mod resolver;

pub use battle::{run_battle, BattleReport, Hands, Outcome};
pub use resolver::{run_war, WarReport, WarState, ESCALATION_CARDS};
