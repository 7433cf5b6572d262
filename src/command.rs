//! Announcer input parsing.

use alloc::string::String;

/// Control word that ends the active round.
pub const END_ROUND: &str = "END";
/// Control word that stops the game.
pub const STOP: &str = "STOP";

/// One input from the announcer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A word to match, as typed.
    Word(String),
    /// End the active round.
    EndRound,
    /// Stop the game.
    Stop,
}

impl Input {
    /// Parses a raw line. Control words are matched case-insensitively after
    /// trimming; anything else is a word. Returns `None` for blank input.
    ///
    /// ```
    /// use wordbingo::Input;
    ///
    /// assert_eq!(Input::parse(" end "), Some(Input::EndRound));
    /// assert_eq!(Input::parse("Stop"), Some(Input::Stop));
    /// assert_eq!(Input::parse("luna"), Some(Input::Word("luna".into())));
    /// assert_eq!(Input::parse("  "), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.eq_ignore_ascii_case(END_ROUND) {
            Some(Self::EndRound)
        } else if trimmed.eq_ignore_ascii_case(STOP) {
            Some(Self::Stop)
        } else {
            Some(Self::Word(String::from(trimmed)))
        }
    }
}
