use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, parse_id};
use crate::language::Language;
use crate::result::{CardStatus, Stats, WinnerRecord};

use super::Game;

impl Game {
    /// Appends winners of the current game to the history.
    pub(super) fn record_winners(&self, winners: &[Card]) {
        let game_number = self.game_number();
        self.history
            .lock()
            .extend(winners.iter().map(|card| WinnerRecord {
                id: String::from(card.id()),
                language: card.language(),
                game_number,
            }));
    }

    /// Returns aggregate figures over the registered cards.
    pub fn stats(&self) -> Stats {
        let cards = self.cards.lock();

        let per_language = Language::ALL
            .into_iter()
            .map(|language| {
                let count = cards
                    .iter()
                    .filter(|card| card.language() == language)
                    .count();
                (language, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        let winners = cards
            .iter()
            .filter(|card| card.is_winner())
            .map(|card| String::from(card.id()))
            .collect();

        Stats {
            total_cards: cards.len(),
            per_language,
            winners,
        }
    }

    /// Returns the progress of the card registered under `id`.
    pub fn card_status(&self, id: &str) -> Option<CardStatus> {
        let (id, _) = parse_id(id).ok()?;
        self.cards
            .lock()
            .iter()
            .find(|card| card.id() == id)
            .map(CardStatus::of)
    }

    /// Returns the progress of every card, in registration order.
    pub fn card_statuses(&self) -> Vec<CardStatus> {
        self.cards.lock().iter().map(CardStatus::of).collect()
    }

    /// Returns the winners of every game played so far, oldest first.
    pub fn winner_history(&self) -> Vec<WinnerRecord> {
        self.history.lock().clone()
    }

    /// Forgets the winner history.
    pub fn clear_history(&self) {
        self.history.lock().clear();
    }
}
