//! Game session and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::language::Language;
use crate::options::GameOptions;
use crate::result::WinnerRecord;

mod announce;
mod registry;
mod report;
mod round;
pub mod state;

pub use state::{FinishReason, GameState};

/// A word bingo session that owns the registered cards and the round flow.
///
/// Operations that change the cards or the round flow hold the state lock
/// until they return, so they are applied one at a time even when the game is
/// shared between threads. Locks are always taken in the order rng, state,
/// cards, schedule, round index, history.
#[derive(Debug)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Registered cards, in registration order.
    pub cards: Mutex<Vec<Card>>,
    /// Round order of the current game.
    schedule: Mutex<Vec<Language>>,
    /// Index of the active round in `schedule`.
    round_index: Mutex<usize>,
    /// Winners of every finished game.
    history: Mutex<Vec<WinnerRecord>>,
    /// Number of games started.
    games_started: AtomicU32,
    /// Random number generator for round order.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with no cards and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use wordbingo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::from_cards(options, seed, Vec::new())
    }

    /// Creates a new game holding `cards` as given.
    ///
    /// Ids are not checked for uniqueness here; [`Game::start_game`] refuses
    /// to start while duplicates remain.
    #[must_use]
    pub fn from_cards(options: GameOptions, seed: u64, cards: Vec<Card>) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::NotStarted),
            cards: Mutex::new(cards),
            schedule: Mutex::new(Vec::new()),
            round_index: Mutex::new(0),
            history: Mutex::new(Vec::new()),
            games_started: AtomicU32::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of games started so far.
    pub fn game_number(&self) -> u32 {
        self.games_started.load(Ordering::SeqCst)
    }

    /// Returns the language of the active round, if any.
    pub fn current_language(&self) -> Option<Language> {
        self.state().active_language()
    }

    /// Returns the round order of the current (or last) game.
    pub fn round_order(&self) -> Vec<Language> {
        self.schedule.lock().clone()
    }

    /// Returns the rounds still to be played after the active one.
    ///
    /// Scheduled languages without cards are left out, as play skips them.
    pub fn upcoming_rounds(&self) -> Vec<Language> {
        if self.current_language().is_none() {
            return Vec::new();
        }
        let index = *self.round_index.lock();
        let tail = self
            .schedule
            .lock()
            .get(index + 1..)
            .map(<[Language]>::to_vec)
            .unwrap_or_default();

        let cards = self.cards.lock();
        tail.into_iter()
            .filter(|language| cards.iter().any(|card| card.language() == *language))
            .collect()
    }

    /// Returns the number of cards playing the active round.
    pub fn round_cards(&self) -> usize {
        self.current_language().map_or(0, |language| {
            self.cards
                .lock()
                .iter()
                .filter(|card| card.language() == language)
                .count()
        })
    }
}
