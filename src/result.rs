//! Outcome and report types returned by the game.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::language::Language;

/// Result of announcing a word in the active round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// The normalized word, or `None` if the input was blank.
    pub word: Option<String>,
    /// Round cards that hold the word marked after the announcement.
    pub matched: usize,
    /// Cards that completed on this word, in registration order.
    pub winners: Vec<Card>,
}

impl Announcement {
    /// Returns whether the announcement produced winners and ended the game.
    #[must_use]
    pub fn has_winners(&self) -> bool {
        !self.winners.is_empty()
    }
}

/// Result of ending the active round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEnd {
    /// Winners were found; the game is finished.
    Winners(Vec<Card>),
    /// No winners; play continues with this language.
    NextRound(Language),
    /// No winners and no rounds left; the game is finished.
    Exhausted,
}

/// Result of handling one announcer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// A word was announced.
    Announced(Announcement),
    /// The round was ended.
    RoundEnded(RoundEnd),
    /// The game was stopped.
    Stopped,
}

/// A winning card recorded in the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerRecord {
    /// The winning card id.
    pub id: String,
    /// The winning card language.
    pub language: Language,
    /// 1-based number of the game the card won.
    pub game_number: u32,
}

/// Aggregate figures over the registered cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Number of registered cards.
    pub total_cards: usize,
    /// Card count per language, in canonical language order, omitting zeros.
    pub per_language: Vec<(Language, usize)>,
    /// Ids of cards that are currently winners.
    pub winners: Vec<String>,
}

/// Progress of a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStatus {
    /// Card id.
    pub id: String,
    /// Card language.
    pub language: Language,
    /// Marked words, sorted.
    pub marked: Vec<String>,
    /// Remaining words, sorted.
    pub remaining: Vec<String>,
    /// Whether every word is marked.
    pub is_winner: bool,
}

impl CardStatus {
    /// Builds a status snapshot of `card`.
    #[must_use]
    pub fn of(card: &Card) -> Self {
        Self {
            id: String::from(card.id()),
            language: card.language(),
            marked: card.marked().iter().cloned().collect(),
            remaining: card.remaining().into_iter().collect(),
            is_winner: card.is_winner(),
        }
    }

    /// Total words on the card.
    #[must_use]
    pub fn total(&self) -> usize {
        self.marked.len() + self.remaining.len()
    }

    /// Returns at most `limit` remaining words and whether more were cut.
    #[must_use]
    pub fn preview(&self, limit: usize) -> (&[String], bool) {
        let shown = self.remaining.len().min(limit);
        (&self.remaining[..shown], self.remaining.len() > limit)
    }
}

/// Result of registering a batch of cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchAdd {
    /// Cards added to the registry.
    pub added: usize,
    /// Ids skipped because they were already registered.
    pub duplicates: Vec<String>,
}
