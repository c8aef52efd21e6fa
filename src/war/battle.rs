//! Single card-reveal exchanges.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::{PlayerId, PlayerPair, Result};

/// Both players' hands, indexed by `PlayerId`.
pub type Hands = PlayerPair<Deck>;

/// Who won a battle, a war, or the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Player1Win,
    Player2Win,
    Tie,
}

impl Outcome {
    /// Classify a rank comparison from player one's point of view.
    #[must_use]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Outcome::Player1Win,
            Ordering::Less => Outcome::Player2Win,
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// Outcome where `player` wins.
    #[must_use]
    pub const fn win_for(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Outcome::Player1Win,
            PlayerId::Two => Outcome::Player2Win,
        }
    }

    /// The winning player, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Player1Win => Some(PlayerId::One),
            Outcome::Player2Win => Some(PlayerId::Two),
            Outcome::Tie => None,
        }
    }

    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

/// Record of one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// Card revealed by each player.
    pub cards_played: PlayerPair<Card>,
    pub outcome: Outcome,
}

/// Reveal the top card of each hand and compare ranks.
///
/// Consumes exactly one card from each hand. Both hands must be non-empty;
/// the war resolver checks for exhaustion before every call.
pub fn run_battle(hands: &mut Hands) -> Result<BattleReport> {
    let first = hands[PlayerId::One].deal()?;
    let second = hands[PlayerId::Two].deal()?;
    let outcome = Outcome::from_ordering(first.compare(second));

    tracing::trace!(%first, %second, ?outcome, "battle");

    Ok(BattleReport {
        cards_played: PlayerPair::new(first, second),
        outcome,
    })
}
