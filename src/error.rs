//! Error types for card and game operations.

use alloc::string::String;
use alloc::vec::Vec;

use thiserror::Error;

use crate::language::Language;

/// Errors that can occur while constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Identifier does not match `<SP|EN|PT|DT><6 digits>`.
    #[error("invalid card id")]
    InvalidId,
    /// No usable words after normalization.
    #[error("card has no usable words")]
    EmptyWordSet,
    /// More distinct words than the language allows.
    #[error("card has {count} words, the limit for {language} is {limit}")]
    WordLimitExceeded {
        /// Card language.
        language: Language,
        /// Distinct words supplied.
        count: usize,
        /// Ceiling for the language.
        limit: usize,
    },
}

/// Errors that can occur while changing the card registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A card with the same id is already registered.
    #[error("card id {0} is already registered")]
    DuplicateId(String),
    /// Cards cannot be changed while a round is being played.
    #[error("cards cannot be changed while a game is in progress")]
    GameInProgress,
    /// No card with the given id is registered.
    #[error("card not found")]
    CardNotFound,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    /// No cards are registered.
    #[error("no cards are registered")]
    NoCards,
    /// Two or more cards share an id.
    #[error("duplicate card ids: {}", .0.join(", "))]
    DuplicateIds(Vec<String>),
    /// A round is already being played.
    #[error("a game is already in progress")]
    GameInProgress,
}

/// Errors that can occur when announcing a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnnounceError {
    /// No round is active.
    #[error("no round is active")]
    SessionNotStarted,
}

/// Errors that can occur when ending a round or stopping the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// No round is active.
    #[error("no round is active")]
    SessionNotStarted,
}

/// Errors that can occur while handling a raw announcer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The word could not be announced.
    #[error(transparent)]
    Announce(#[from] AnnounceError),
    /// The control signal could not be applied.
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Reason a single ingestion record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineErrorKind {
    /// The record lacks an id or any words.
    #[error("expected an id followed by at least one word")]
    Malformed,
    /// The id or words cell is not valid UTF-8.
    #[error("record is not valid UTF-8")]
    InvalidUtf8,
    /// The card failed validation.
    #[error(transparent)]
    Card(#[from] CardError),
    /// The id appeared earlier in the same source.
    #[error("card id {0} appears more than once")]
    DuplicateId(String),
}

/// A rejected ingestion record with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct LineError {
    /// 1-based line (or CSV record) number.
    pub line: usize,
    /// Why the record was rejected.
    pub kind: LineErrorKind,
}

/// Errors that abort reading a whole ingestion source.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source could not be read.
    #[error("failed to read cards: {0}")]
    Io(#[from] std::io::Error),
    /// The CSV data is malformed.
    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),
    /// A required CSV column is missing.
    #[error("missing `{0}` column")]
    MissingColumn(&'static str),
}
