//! Pull-based game driver.

use std::iter::FusedIterator;

use rand::Rng;

use crate::cards::{Deck, STANDARD_DECK_SIZE};
use crate::core::{PlayerPair, Result};
use crate::war::{run_war, Hands, WarReport};

/// A game in progress, yielding one war per `next()`.
///
/// The iterator ends after the report that ends the game, or after the
/// first error. Nothing is simulated ahead of the consumer.
///
/// ```
/// use rust_war::core::GameRng;
/// use rust_war::game::run_game;
///
/// let mut game = run_game(&mut GameRng::new(42)).unwrap();
/// let first = game.next().unwrap().unwrap();
///
/// assert!(!first.battles.is_empty());
/// assert_eq!(game.wars_played(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    hands: Hands,
    wars_played: usize,
    finished: bool,
}

impl Game {
    /// Shuffle a standard deck with `rng` and deal half to each player.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut deck = Deck::standard();
        deck.shuffle(rng);
        let (one, two) = deck.split()?;

        tracing::info!(cards = STANDARD_DECK_SIZE, "game started");
        Ok(Self::from_hands(PlayerPair::new(one, two)))
    }

    /// Start from explicit hands.
    #[must_use]
    pub fn from_hands(hands: Hands) -> Self {
        Self {
            hands,
            wars_played: 0,
            finished: false,
        }
    }

    /// Current hands.
    #[must_use]
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    #[must_use]
    pub fn wars_played(&self) -> usize {
        self.wars_played
    }

    /// Whether the game has ended (or failed).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for Game {
    type Item = Result<WarReport>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = run_war(&mut self.hands);
        self.wars_played += 1;

        match &result {
            Ok(report) if report.ends_game => {
                self.finished = true;
                tracing::info!(wars = self.wars_played, winner = ?report.winner, "game over");
            }
            Ok(_) => {}
            Err(error) => {
                self.finished = true;
                tracing::warn!(%error, wars = self.wars_played, "war failed");
            }
        }

        Some(result)
    }
}

impl FusedIterator for Game {}

/// Start a game shuffled by `rng`.
pub fn run_game<R: Rng + ?Sized>(rng: &mut R) -> Result<Game> {
    Game::new(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::{GameRng, PlayerId, WarError};
    use crate::war::Outcome;

    #[test]
    fn test_new_game_deals_halves() {
        let game = run_game(&mut GameRng::new(1)).unwrap();

        assert_eq!(game.hands()[PlayerId::One].len(), 26);
        assert_eq!(game.hands()[PlayerId::Two].len(), 26);
        assert_eq!(game.wars_played(), 0);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_same_seed_same_game() {
        let a: Vec<_> = run_game(&mut GameRng::new(5)).unwrap().take(200).collect();
        let b: Vec<_> = run_game(&mut GameRng::new(5)).unwrap().take(200).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_stops_after_game_ends() {
        let hands = PlayerPair::new(
            Deck::from_cards([Card::new(Rank::Ace, Suit::Clubs), Card::new(Rank::King, Suit::Clubs)]),
            Deck::from_cards([Card::new(Rank::Two, Suit::Hearts)]),
        );
        let mut game = Game::from_hands(hands);

        let report = game.next().unwrap().unwrap();
        assert!(report.ends_game);
        assert_eq!(report.winner, Outcome::Player1Win);

        assert!(game.is_finished());
        assert!(game.next().is_none());
        assert!(game.next().is_none());
        assert_eq!(game.wars_played(), 1);
    }

    #[test]
    fn test_error_ends_iteration() {
        let hands = PlayerPair::new(Deck::new(), Deck::from_cards([Card::new(Rank::Two, Suit::Hearts)]));
        let mut game = Game::from_hands(hands);

        assert_eq!(game.next(), Some(Err(WarError::EmptyDeck)));
        assert!(game.next().is_none());
    }
}
