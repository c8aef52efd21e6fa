//! Ordered card piles: the full deck and each player's hand.
//!
//! The front of a `Deck` is the top (next card dealt); the back is the
//! bottom, where won cards are returned. A hand is a `Deck`.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{Result, WarError};

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// An ordered pile of cards.
///
/// ## Usage
///
/// ```
/// use rust_war::cards::{Card, Deck, Rank, Suit};
///
/// let mut deck = Deck::standard();
/// assert_eq!(deck.len(), 52);
///
/// let top = deck.deal().unwrap();
/// assert_eq!(top, Card::new(Rank::Two, Suit::Clubs));
///
/// deck.append([top]);
/// assert_eq!(deck.iter().last(), Some(&top));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A full, unshuffled 52-card deck in suit-major, rank-minor order.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(STANDARD_DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Build a deck from explicit cards; the first card is the top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffle in place with a uniform random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Split into two equal halves: the top half and the bottom half.
    ///
    /// Relative order is preserved in each half. Fails with
    /// [`WarError::OddSplit`] if the deck cannot be halved evenly.
    pub fn split(mut self) -> Result<(Deck, Deck)> {
        let len = self.len();
        if len % 2 != 0 {
            return Err(WarError::OddSplit { len });
        }

        let bottom = self.cards.split_off(len / 2);
        Ok((self, Deck { cards: bottom }))
    }

    /// Remove and return the top card.
    pub fn deal(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(WarError::EmptyDeck)
    }

    /// Place cards on the bottom, keeping their order.
    pub fn append(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}
