//! Game state types.

use crate::language::Language;

/// Why a game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// One or more cards won.
    Winners,
    /// Every round was played without a winner.
    Exhausted,
    /// The announcer stopped the game.
    Stopped,
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No game has been started.
    NotStarted,
    /// A round is being played for this language.
    RoundActive(Language),
    /// The game is over. A new game may be started.
    Finished(FinishReason),
}

impl GameState {
    /// Returns the language of the active round, if any.
    #[must_use]
    pub const fn active_language(self) -> Option<Language> {
        match self {
            Self::RoundActive(language) => Some(language),
            Self::NotStarted | Self::Finished(_) => None,
        }
    }
}
