//! War resolution: battles, tie escalation and pot transfer.
//!
//! A war is a small state machine:
//!
//! ```text
//! InProgress --battle decisive--> Resolved(winner)   pot goes to winner
//!     |  ^
//!     |  '--tie, escalation complete--'
//!     '--a hand runs out--> GameEnded(outcome)       pot stays unawarded
//! ```
//!
//! Every pass through `InProgress` consumes at least two cards, so a war
//! always finishes within `total cards / 2` battles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::battle::{run_battle, BattleReport, Hands, Outcome};
use crate::cards::Card;
use crate::core::{PlayerId, PlayerPair, Result};

/// Cards each player adds face down to the pot after a tied battle.
pub const ESCALATION_CARDS: usize = 3;

/// State of a war being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarState {
    /// Another battle is needed.
    InProgress,
    /// A battle was won; the pot went to this player.
    Resolved(PlayerId),
    /// A hand ran out of cards. Carries the game result.
    GameEnded(Outcome),
}

/// Record of one war.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarReport {
    /// Every battle fought, in order. Usually one.
    pub battles: SmallVec<[BattleReport; 2]>,

    /// All cards committed during the war, in play order.
    pub pot: Vec<Card>,

    /// Whether this war ended the game. If set, `winner` is the game result.
    pub ends_game: bool,

    pub winner: Outcome,

    /// Cards in each hand once the war is over.
    pub remaining: PlayerPair<usize>,
}

impl WarReport {
    /// The terminal state this war reached.
    #[must_use]
    pub fn state(&self) -> WarState {
        match (self.ends_game, self.winner.winner()) {
            (false, Some(player)) => WarState::Resolved(player),
            _ => WarState::GameEnded(self.winner),
        }
    }

    /// Total cards accounted for: both hands plus any unawarded pot.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let held = self.remaining[PlayerId::One] + self.remaining[PlayerId::Two];
        if self.ends_game {
            held + self.pot.len()
        } else {
            held
        }
    }
}

/// Resolve one war between the two hands.
///
/// Hands are mutated in place: played cards leave them and, unless the game
/// ends, the whole pot is appended to the winner's hand.
pub fn run_war(hands: &mut Hands) -> Result<WarReport> {
    let mut war = WarResolver::new(hands);
    while war.state == WarState::InProgress {
        war.step()?;
    }
    Ok(war.finish())
}

struct WarResolver<'a> {
    hands: &'a mut Hands,
    battles: SmallVec<[BattleReport; 2]>,
    pot: Vec<Card>,
    state: WarState,
}

impl<'a> WarResolver<'a> {
    fn new(hands: &'a mut Hands) -> Self {
        Self {
            hands,
            battles: SmallVec::new(),
            pot: Vec::with_capacity(2),
            state: WarState::InProgress,
        }
    }

    /// One battle, followed by either resolution or escalation.
    fn step(&mut self) -> Result<()> {
        let battle = run_battle(self.hands)?;
        self.pot.extend(battle.cards_played.into_array());
        self.battles.push(battle);

        if let Some(result) = check_end(self.hands, battle.outcome) {
            self.state = WarState::GameEnded(result);
            return Ok(());
        }

        match battle.outcome.winner() {
            Some(winner) => {
                self.hands[winner].append(self.pot.iter().copied());
                self.state = WarState::Resolved(winner);
                Ok(())
            }
            None => self.escalate(),
        }
    }

    /// Deal `ESCALATION_CARDS` pairs into the pot, stopping if a hand empties.
    fn escalate(&mut self) -> Result<()> {
        for _ in 0..ESCALATION_CARDS {
            let first = self.hands[PlayerId::One].deal()?;
            let second = self.hands[PlayerId::Two].deal()?;
            self.pot.extend([first, second]);

            if let Some(result) = check_end(self.hands, Outcome::Tie) {
                self.state = WarState::GameEnded(result);
                return Ok(());
            }
        }
        Ok(())
    }

    fn finish(self) -> WarReport {
        let (winner, ends_game) = match self.state {
            WarState::Resolved(player) => (Outcome::win_for(player), false),
            WarState::GameEnded(result) => (result, true),
            WarState::InProgress => unreachable!("war finished while still in progress"),
        };
        let remaining = self.hands.map(|hand| hand.len());

        tracing::debug!(
            battles = self.battles.len(),
            pot = self.pot.len(),
            ?winner,
            ends_game,
            remaining = ?remaining.into_array(),
            "war resolved"
        );

        WarReport {
            battles: self.battles,
            pot: self.pot,
            ends_game,
            winner,
            remaining,
        }
    }
}

/// Detect exhaustion. With both hands empty the last exchange decides.
fn check_end(hands: &Hands, last: Outcome) -> Option<Outcome> {
    match (hands[PlayerId::One].is_empty(), hands[PlayerId::Two].is_empty()) {
        (true, true) => Some(last),
        (false, true) => Some(Outcome::Player1Win),
        (true, false) => Some(Outcome::Player2Win),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Rank, Suit};

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn hands(one: &[Card], two: &[Card]) -> Hands {
        PlayerPair::new(
            Deck::from_cards(one.iter().copied()),
            Deck::from_cards(two.iter().copied()),
        )
    }

    #[test]
    fn test_loser_runs_out() {
        let eight = c(Rank::Eight, Suit::Clubs);
        let ten = c(Rank::Ten, Suit::Hearts);
        let mut hands = hands(&[eight], &[ten, c(Rank::Two, Suit::Hearts)]);

        let report = run_war(&mut hands).unwrap();

        assert!(report.ends_game);
        assert_eq!(report.winner, Outcome::Player2Win);
        assert_eq!(report.battles.len(), 1);
        assert_eq!(report.pot, vec![eight, ten]);
        assert_eq!(report.state(), WarState::GameEnded(Outcome::Player2Win));
    }

    #[test]
    fn test_decisive_battle_awards_pot() {
        let eight = c(Rank::Eight, Suit::Clubs);
        let ten = c(Rank::Ten, Suit::Hearts);
        let two = c(Rank::Two, Suit::Hearts);
        let mut hands = hands(&[eight, c(Rank::Nine, Suit::Clubs)], &[ten, two]);

        let report = run_war(&mut hands).unwrap();

        assert!(!report.ends_game);
        assert_eq!(report.winner, Outcome::Player2Win);
        assert_eq!(report.state(), WarState::Resolved(PlayerId::Two));
        assert_eq!(report.pot, vec![eight, ten]);
        assert_eq!(report.remaining.into_array(), [1, 3]);

        let winner_hand: Vec<Card> = hands[PlayerId::Two].iter().copied().collect();
        assert_eq!(winner_hand, vec![two, eight, ten]);
    }

    #[test]
    fn test_escalation_then_win() {
        let mut hands = hands(
            &[
                c(Rank::Eight, Suit::Clubs),
                c(Rank::Nine, Suit::Clubs),
                c(Rank::Nine, Suit::Clubs),
                c(Rank::Nine, Suit::Clubs),
                c(Rank::Six, Suit::Clubs),
                c(Rank::Five, Suit::Clubs),
            ],
            &[
                c(Rank::Eight, Suit::Hearts),
                c(Rank::Three, Suit::Hearts),
                c(Rank::Three, Suit::Hearts),
                c(Rank::Three, Suit::Hearts),
                c(Rank::Two, Suit::Hearts),
                c(Rank::Ace, Suit::Hearts),
            ],
        );

        let report = run_war(&mut hands).unwrap();

        assert!(!report.ends_game);
        assert_eq!(report.winner, Outcome::Player1Win);
        assert_eq!(report.battles.len(), 2);
        assert_eq!(report.battles[0].outcome, Outcome::Tie);
        assert_eq!(report.battles[1].outcome, Outcome::Player1Win);
        assert_eq!(report.remaining.into_array(), [11, 1]);
        assert_eq!(report.cards_in_play(), 12);
    }

    #[test]
    fn test_hand_empties_mid_escalation() {
        let mut hands = hands(
            &[c(Rank::Five, Suit::Clubs), c(Rank::Two, Suit::Clubs)],
            &[
                c(Rank::Five, Suit::Hearts),
                c(Rank::Three, Suit::Hearts),
                c(Rank::Four, Suit::Hearts),
            ],
        );

        let report = run_war(&mut hands).unwrap();

        assert!(report.ends_game);
        assert_eq!(report.winner, Outcome::Player2Win);
        assert_eq!(report.battles.len(), 1);
        assert_eq!(report.pot.len(), 4);
        assert_eq!(report.remaining.into_array(), [0, 1]);
        assert_eq!(report.cards_in_play(), 5);
    }

    #[test]
    fn test_both_empty_mid_escalation_ties() {
        let mut hands = hands(
            &[c(Rank::Five, Suit::Clubs), c(Rank::Two, Suit::Clubs)],
            &[c(Rank::Five, Suit::Hearts), c(Rank::King, Suit::Hearts)],
        );

        let report = run_war(&mut hands).unwrap();

        assert!(report.ends_game);
        assert_eq!(report.winner, Outcome::Tie);
        assert_eq!(report.pot.len(), 4);
    }

    #[test]
    fn test_both_empty_after_decisive_battle() {
        let mut hands = hands(&[c(Rank::Ace, Suit::Diamonds)], &[c(Rank::Two, Suit::Diamonds)]);

        let report = run_war(&mut hands).unwrap();

        assert!(report.ends_game);
        assert_eq!(report.winner, Outcome::Player1Win);
        assert_eq!(report.remaining.into_array(), [0, 0]);
    }

    #[test]
    fn test_check_end() {
        let two = c(Rank::Two, Suit::Clubs);
        assert_eq!(check_end(&hands(&[two], &[two]), Outcome::Tie), None);
        assert_eq!(check_end(&hands(&[two], &[]), Outcome::Tie), Some(Outcome::Player1Win));
        assert_eq!(check_end(&hands(&[], &[two]), Outcome::Tie), Some(Outcome::Player2Win));
        assert_eq!(check_end(&hands(&[], &[]), Outcome::Tie), Some(Outcome::Tie));
        assert_eq!(check_end(&hands(&[], &[]), Outcome::Player2Win), Some(Outcome::Player2Win));
    }

    #[test]
    fn test_empty_hands_error() {
        let mut hands = hands(&[], &[]);
        assert!(run_war(&mut hands).is_err());
    }
}
