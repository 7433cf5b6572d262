use alloc::string::String;
use alloc::vec::Vec;

use log::{info, warn};

use crate::card::{Card, parse_id};
use crate::error::RegistryError;
use crate::result::BatchAdd;

use super::{Game, GameState};

impl Game {
    /// Registers a card.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played or a card with the same id
    /// is already registered.
    pub fn add_card(&self, card: Card) -> Result<(), RegistryError> {
        let state = self.state.lock();
        if state.active_language().is_some() {
            return Err(RegistryError::GameInProgress);
        }

        let mut cards = self.cards.lock();
        if cards.iter().any(|existing| existing.id() == card.id()) {
            warn!("card {} is already registered", card.id());
            return Err(RegistryError::DuplicateId(String::from(card.id())));
        }

        cards.push(card);
        drop(cards);
        drop(state);
        Ok(())
    }

    /// Registers a batch of cards.
    ///
    /// Cards whose id is already registered (or repeated earlier in the batch)
    /// are skipped and reported; the rest of the batch is added.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played. Nothing is added then.
    pub fn add_cards<I>(&self, batch: I) -> Result<BatchAdd, RegistryError>
    where
        I: IntoIterator<Item = Card>,
    {
        let state = self.state.lock();
        if state.active_language().is_some() {
            return Err(RegistryError::GameInProgress);
        }

        let mut cards = self.cards.lock();
        let mut outcome = BatchAdd {
            added: 0,
            duplicates: Vec::new(),
        };

        for card in batch {
            if cards.iter().any(|existing| existing.id() == card.id()) {
                warn!("card {} is already registered, skipped", card.id());
                outcome.duplicates.push(String::from(card.id()));
            } else {
                cards.push(card);
                outcome.added += 1;
            }
        }
        drop(cards);
        drop(state);

        info!(
            "{} card(s) added, {} duplicate(s) skipped",
            outcome.added,
            outcome.duplicates.len()
        );
        Ok(outcome)
    }

    /// Removes the first card registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played or no such card exists.
    pub fn remove_card(&self, id: &str) -> Result<Card, RegistryError> {
        let state = self.state.lock();
        if state.active_language().is_some() {
            return Err(RegistryError::GameInProgress);
        }

        let (id, _) = parse_id(id).map_err(|_| RegistryError::CardNotFound)?;
        let mut cards = self.cards.lock();
        let index = cards
            .iter()
            .position(|card| card.id() == id)
            .ok_or(RegistryError::CardNotFound)?;
        let card = cards.remove(index);
        drop(cards);
        drop(state);
        Ok(card)
    }

    /// Removes every card whose id repeats an earlier card's id.
    ///
    /// The first registration of each id is kept. Returns the removed cards.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played.
    pub fn remove_duplicates(&self) -> Result<Vec<Card>, RegistryError> {
        let state = self.state.lock();
        if state.active_language().is_some() {
            return Err(RegistryError::GameInProgress);
        }

        let mut cards = self.cards.lock();
        let mut kept: Vec<Card> = Vec::with_capacity(cards.len());
        let mut removed = Vec::new();
        for card in cards.drain(..) {
            if kept.iter().any(|existing| existing.id() == card.id()) {
                removed.push(card);
            } else {
                kept.push(card);
            }
        }
        *cards = kept;
        drop(cards);
        drop(state);

        if !removed.is_empty() {
            warn!("removed {} card(s) with duplicate ids", removed.len());
        }
        Ok(removed)
    }

    /// Removes every card and forgets the last game's round order.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is being played.
    pub fn clear_cards(&self) -> Result<(), RegistryError> {
        let mut state = self.state.lock();
        if state.active_language().is_some() {
            return Err(RegistryError::GameInProgress);
        }

        self.cards.lock().clear();
        self.schedule.lock().clear();
        *self.round_index.lock() = 0;
        *state = GameState::NotStarted;
        drop(state);
        Ok(())
    }

    /// Returns whether cards can be added or removed right now.
    pub fn is_idle(&self) -> bool {
        self.state().active_language().is_none()
    }

    /// Returns a snapshot of every registered card.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.lock().clone()
    }

    /// Returns a snapshot of the card registered under `id`.
    pub fn card(&self, id: &str) -> Option<Card> {
        let (id, _) = parse_id(id).ok()?;
        self.cards.lock().iter().find(|card| card.id() == id).cloned()
    }

    /// Returns the number of registered cards.
    pub fn card_count(&self) -> usize {
        self.cards.lock().len()
    }
}
