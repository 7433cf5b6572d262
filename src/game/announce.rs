use alloc::vec::Vec;

use log::{debug, info};

use crate::card::normalize_word;
use crate::command::Input;
use crate::engine::apply_announced_word;
use crate::error::{AnnounceError, InputError};
use crate::result::{Announcement, InputOutcome};

use super::{FinishReason, Game, GameState};

impl Game {
    /// Announces a word in the active round.
    ///
    /// The word is marked on every card of the round's language. If any card
    /// completes, the game finishes and all cards completing on this word are
    /// returned as winners. A blank word is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is active.
    pub fn announce(&self, word: &str) -> Result<Announcement, AnnounceError> {
        let mut state = self.state.lock();
        let language = state
            .active_language()
            .ok_or(AnnounceError::SessionNotStarted)?;

        let Some(word) = normalize_word(word) else {
            return Ok(Announcement {
                word: None,
                matched: 0,
                winners: Vec::new(),
            });
        };

        let mut cards = self.cards.lock();
        let winners = apply_announced_word(
            &word,
            cards.iter_mut().filter(|card| card.language() == language),
        );
        let matched = cards
            .iter()
            .filter(|card| card.language() == language && card.marked().contains(&word))
            .count();
        drop(cards);

        debug!("announced {word:?} in round {language}: {matched} card(s) hold it");

        if !winners.is_empty() {
            self.record_winners(&winners);
            *state = GameState::Finished(FinishReason::Winners);
            info!(
                "{} winner(s) on {word:?}: {}",
                winners.len(),
                winners.iter().map(|card| card.id()).collect::<Vec<_>>().join(", ")
            );
        }

        Ok(Announcement {
            word: Some(word),
            matched,
            winners,
        })
    }

    /// Applies one announcer input: a word, an end-of-round or a stop signal.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is active.
    pub fn handle(&self, input: Input) -> Result<InputOutcome, InputError> {
        match input {
            Input::Word(word) => Ok(InputOutcome::Announced(self.announce(&word)?)),
            Input::EndRound => Ok(InputOutcome::RoundEnded(self.end_round()?)),
            Input::Stop => {
                self.stop()?;
                Ok(InputOutcome::Stopped)
            }
        }
    }
}
