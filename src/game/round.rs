use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use log::{info, warn};
use rand::Rng;

use crate::card::Card;
use crate::engine::{duplicate_ids, present_languages, shuffle_languages, sweep_winners};
use crate::error::{RoundError, StartError};
use crate::language::Language;
use crate::options::RoundSelection;
use crate::result::RoundEnd;

use super::{FinishReason, Game, GameState};

/// Finds the first scheduled round at or after `from` that has cards.
fn next_playable(schedule: &[Language], from: usize, cards: &[Card]) -> Option<(usize, Language)> {
    schedule
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, language)| cards.iter().any(|card| card.language() == **language))
        .map(|(index, language)| (index, *language))
}

impl Game {
    /// Starts a new game using the game's own random source.
    ///
    /// Returns the language of the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already being played, no cards are
    /// registered, or card ids are not unique.
    pub fn start_game(&self) -> Result<Language, StartError> {
        let mut rng = self.rng.lock();
        self.start_game_with(&mut *rng)
    }

    /// Starts a new game, shuffling the round order with `rng`.
    ///
    /// Clears the marks of every card and enters the first round that has
    /// cards. Returns the language of that round.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already being played, no cards are
    /// registered, or card ids are not unique.
    pub fn start_game_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Language, StartError> {
        let mut state = self.state.lock();
        if state.active_language().is_some() {
            return Err(StartError::GameInProgress);
        }

        let mut cards = self.cards.lock();
        if cards.is_empty() {
            return Err(StartError::NoCards);
        }

        let duplicates = duplicate_ids(cards.iter());
        if !duplicates.is_empty() {
            warn!("refusing to start: duplicate card ids {duplicates:?}");
            return Err(StartError::DuplicateIds(duplicates));
        }

        let mut order = match self.options.round_selection {
            RoundSelection::PresentLanguages => present_languages(cards.iter()),
            RoundSelection::AllLanguages => Language::ALL.to_vec(),
        };
        if self.options.shuffle_rounds {
            shuffle_languages(&mut order, rng);
        }

        for card in cards.iter_mut() {
            card.reset();
        }

        let (index, first) = next_playable(&order, 0, &cards).ok_or(StartError::NoCards)?;
        drop(cards);

        let number = self.games_started.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            "game {number} started, round order {}",
            order.iter().map(|language| language.prefix()).collect::<Vec<_>>().join(" -> ")
        );

        *self.schedule.lock() = order;
        *self.round_index.lock() = index;
        *state = GameState::RoundActive(first);
        drop(state);

        info!("round {first} started");
        Ok(first)
    }

    /// Ends the active round.
    ///
    /// Cards of the round that are already winners finish the game. Otherwise
    /// play moves to the next round that has cards, or the game finishes when
    /// none is left.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is active.
    pub fn end_round(&self) -> Result<RoundEnd, RoundError> {
        let mut state = self.state.lock();
        let language = state
            .active_language()
            .ok_or(RoundError::SessionNotStarted)?;

        let cards = self.cards.lock();
        let winners = sweep_winners(cards.iter().filter(|card| card.language() == language));
        if !winners.is_empty() {
            drop(cards);
            self.record_winners(&winners);
            *state = GameState::Finished(FinishReason::Winners);
            info!("round {language} ended with {} winner(s)", winners.len());
            return Ok(RoundEnd::Winners(winners));
        }

        let schedule = self.schedule.lock();
        let mut index = self.round_index.lock();
        if let Some((next_index, next)) = next_playable(&schedule, *index + 1, &cards) {
            *index = next_index;
            *state = GameState::RoundActive(next);
            info!("round {language} ended without winners, round {next} started");
            Ok(RoundEnd::NextRound(next))
        } else {
            *state = GameState::Finished(FinishReason::Exhausted);
            info!("round {language} ended, all rounds played without winners");
            Ok(RoundEnd::Exhausted)
        }
    }

    /// Stops the game without winners.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is active.
    pub fn stop(&self) -> Result<(), RoundError> {
        let mut state = self.state.lock();
        let language = state
            .active_language()
            .ok_or(RoundError::SessionNotStarted)?;
        *state = GameState::Finished(FinishReason::Stopped);
        info!("game stopped during round {language}");
        Ok(())
    }
}
