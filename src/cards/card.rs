//! Standard playing cards packed into a single byte.
//!
//! ## Encoding
//!
//! A `Card` stores `suit * 16 + rank`, where rank is the face value
//! (`2..=10`, Jack = 11, Queen = 12, King = 13, Ace = 14) and suit is its
//! index in [`Suit::ALL`]. Rank occupies the low nibble, suit the next two
//! bits, so both decode with a shift and a mask.
//!
//! Suits never affect ordering: [`Card::compare`] looks at rank only.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::WarError;

/// Width of the rank field, rounded up to a power of two.
const SUIT_MODULO: u8 = 16;

/// Card suit. Carries no ordering weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Spades = 2,
    Hearts = 3,
}

impl Suit {
    /// All suits in deck generation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Spades, Suit::Hearts];

    /// Decode a suit from its index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Spades),
            3 => Some(Suit::Hearts),
            _ => None,
        }
    }

    /// Display name, e.g. "Hearts".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank. Ace is high.
///
/// The discriminant is the rank's face value, so `Rank as u8` compares
/// the way the game does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks, lowest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Decode a rank from its face value (`2..=14`).
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value < 2 || value > 14 {
            return None;
        }
        Some(Self::ALL[(value - 2) as usize])
    }

    /// Face value, `2..=14`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("Jack"),
            Rank::Queen => f.write_str("Queen"),
            Rank::King => f.write_str("King"),
            Rank::Ace => f.write_str("Ace"),
            numeric => write!(f, "{}", numeric.value()),
        }
    }
}

/// A card from a standard 52-card deck.
///
/// ```
/// use rust_war::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Seven, Suit::Spades);
/// assert_eq!(card.rank(), Rank::Seven);
/// assert_eq!(card.suit(), Suit::Spades);
/// assert_eq!(card.to_string(), "7 of Spades");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Pack a rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self(rank as u8 + suit as u8 * SUIT_MODULO)
    }

    /// Decode a packed card code.
    pub fn from_code(code: u8) -> Result<Self, WarError> {
        match (Rank::from_value(code % SUIT_MODULO), Suit::from_index(code / SUIT_MODULO)) {
            (Some(_), Some(_)) => Ok(Self(code)),
            _ => Err(WarError::InvalidCardCode(code)),
        }
    }

    /// The packed code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn rank(self) -> Rank {
        // Codes are validated on construction.
        Rank::ALL[(self.0 % SUIT_MODULO - 2) as usize]
    }

    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / SUIT_MODULO) as usize]
    }

    /// Compare two cards by rank alone.
    ///
    /// Cards of equal rank are `Equal` whatever their suits.
    #[must_use]
    pub fn compare(self, other: Card) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank(), self.suit())
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl TryFrom<u8> for Card {
    type Error = WarError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Card::from_code(code)
    }
}
