//! Push-based game driver: a producer thread feeding a one-slot channel.
//!
//! The producer owns the hands; only finished `WarReport`s cross the
//! thread boundary. Dropping the `WarStream` abandons the game: the
//! producer notices on its next send and exits.

use std::iter::FusedIterator;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use rand::Rng;

use super::orchestrator::Game;
use crate::core::{Result, WarError};
use crate::war::WarReport;

/// Reports buffered between producer and consumer.
pub const STREAM_CAPACITY: usize = 1;

/// Reports from a game simulated on its own thread, in resolution order.
///
/// Yields `Err` once if the game fails, including
/// [`WarError::ProducerPanicked`] when the producer dies without closing
/// the stream cleanly, and then ends.
#[derive(Debug)]
pub struct WarStream {
    reports: Receiver<Result<WarReport>>,
    producer: Option<JoinHandle<()>>,
}

impl WarStream {
    /// Stream an already-dealt game.
    #[must_use]
    pub fn from_game(game: Game) -> Self {
        Self::spawn(move || Ok(game))
    }

    fn spawn<F>(setup: F) -> Self
    where
        F: FnOnce() -> Result<Game> + Send + 'static,
    {
        let (sender, reports) = mpsc::sync_channel(STREAM_CAPACITY);
        let producer = thread::spawn(move || produce(setup, &sender));

        Self {
            reports,
            producer: Some(producer),
        }
    }
}

impl Iterator for WarStream {
    type Item = Result<WarReport>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Ok(item) = self.reports.recv() {
            return Some(item);
        }

        // Channel closed: either the game finished or the producer died.
        let producer = self.producer.take()?;
        match producer.join() {
            Ok(()) => None,
            Err(_) => {
                tracing::warn!("war producer panicked");
                Some(Err(WarError::ProducerPanicked))
            }
        }
    }
}

impl FusedIterator for WarStream {}

/// Simulate a game shuffled by `rng` on a dedicated thread.
///
/// ```
/// use rust_war::core::GameRng;
/// use rust_war::game::spawn_game;
///
/// let first_wars: Vec<_> = spawn_game(GameRng::new(42)).take(3).collect();
/// assert!(first_wars.iter().all(|war| war.is_ok()));
/// ```
pub fn spawn_game<R>(mut rng: R) -> WarStream
where
    R: Rng + Send + 'static,
{
    WarStream::spawn(move || Game::new(&mut rng))
}

fn produce<F>(setup: F, sender: &SyncSender<Result<WarReport>>)
where
    F: FnOnce() -> Result<Game>,
{
    let game = match setup() {
        Ok(game) => game,
        Err(error) => {
            tracing::warn!(%error, "game setup failed");
            // A closed receiver means nobody is left to tell.
            let _ = sender.send(Err(error));
            return;
        }
    };

    for report in game {
        if sender.send(report).is_err() {
            tracing::debug!("war stream dropped by consumer, stopping producer");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Rank, Suit};
    use crate::core::{GameRng, PlayerPair};
    use crate::game::run_game;
    use crate::war::Outcome;
    use rand::RngCore;

    /// An RNG that panics the first time it is used.
    struct ExplodingRng;

    impl RngCore for ExplodingRng {
        fn next_u32(&mut self) -> u32 {
            panic!("rng exploded");
        }

        fn next_u64(&mut self) -> u64 {
            panic!("rng exploded");
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("rng exploded");
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            panic!("rng exploded");
        }
    }

    #[test]
    fn test_stream_matches_pull_iterator() {
        let streamed: Vec<_> = spawn_game(GameRng::new(11)).take(300).collect();
        let pulled: Vec<_> = run_game(&mut GameRng::new(11)).unwrap().take(300).collect();

        assert_eq!(streamed, pulled);
    }

    #[test]
    fn test_stream_closes_after_terminal_report() {
        let hands = PlayerPair::new(
            Deck::from_cards([Card::new(Rank::Nine, Suit::Clubs), Card::new(Rank::Three, Suit::Clubs)]),
            Deck::from_cards([Card::new(Rank::Four, Suit::Hearts)]),
        );
        let mut stream = WarStream::from_game(Game::from_hands(hands));

        let report = stream.next().unwrap().unwrap();
        assert!(report.ends_game);
        assert_eq!(report.winner, Outcome::Player1Win);

        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_stream_surfaces_errors() {
        let hands = PlayerPair::new(Deck::from_cards([Card::new(Rank::Nine, Suit::Clubs)]), Deck::new());
        let mut stream = WarStream::from_game(Game::from_hands(hands));

        assert_eq!(stream.next(), Some(Err(WarError::EmptyDeck)));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_producer_panic_is_not_clean_close() {
        let mut stream = spawn_game(ExplodingRng);

        assert_eq!(stream.next(), Some(Err(WarError::ProducerPanicked)));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_consumer_can_abandon_stream() {
        let mut stream = spawn_game(GameRng::new(3));
        assert!(stream.next().is_some());
        drop(stream);
    }
}
