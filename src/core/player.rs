//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! War is strictly a two-player game, so `PlayerId` is a closed enum
//! rather than an open index.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage backed by `[T; 2]`, indexable by
//! `PlayerId`. Used for hands, played cards and remaining counts.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// The first player; dealt the top half of the shuffled deck.
    One,
    /// The second player; dealt the bottom half.
    Two,
}

impl PlayerId {
    /// Both players, in seat order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// One value per player with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_war::core::{PlayerId, PlayerPair};
///
/// let mut counts = PlayerPair::new(26, 26);
/// counts[PlayerId::Two] -= 1;
///
/// assert_eq!(counts[PlayerId::One], 26);
/// assert_eq!(counts.into_array(), [26, 25]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from player one's and player two's values.
    pub fn new(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a pair with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::One), factory(PlayerId::Two)],
        }
    }

    /// Apply `f` to both values, keeping player order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerPair<U> {
        PlayerPair {
            data: [f(&self.data[0]), f(&self.data[1])],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Unwrap into the underlying array, player one first.
    pub fn into_array(self) -> [T; 2] {
        self.data
    }
}

impl<T> From<[T; 2]> for PlayerPair<T> {
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
