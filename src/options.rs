//! Game configuration options.

/// Which languages get a round when a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RoundSelection {
    /// One round per language that has at least one registered card.
    #[default]
    PresentLanguages,
    /// One round per known language; rounds without cards are skipped.
    AllLanguages,
}

/// Configuration options for a bingo game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use wordbingo::{GameOptions, RoundSelection};
///
/// let options = GameOptions::default()
///     .with_shuffle_rounds(false)
///     .with_round_selection(RoundSelection::AllLanguages)
///     .with_preview_words(5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the round order is shuffled at the start of each game.
    /// When disabled rounds follow [`Language::ALL`](crate::Language::ALL).
    pub shuffle_rounds: bool,
    /// Which languages are scheduled as rounds.
    pub round_selection: RoundSelection,
    /// How many remaining words a [`CardStatus`](crate::CardStatus) preview keeps.
    pub preview_words: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            shuffle_rounds: true,
            round_selection: RoundSelection::PresentLanguages,
            preview_words: 10,
        }
    }
}

impl GameOptions {
    /// Sets whether rounds are shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use wordbingo::GameOptions;
    ///
    /// let options = GameOptions::default().with_shuffle_rounds(false);
    /// assert!(!options.shuffle_rounds);
    /// ```
    #[must_use]
    pub const fn with_shuffle_rounds(mut self, shuffle: bool) -> Self {
        self.shuffle_rounds = shuffle;
        self
    }

    /// Sets which languages get a round.
    ///
    /// # Example
    ///
    /// ```
    /// use wordbingo::{GameOptions, RoundSelection};
    ///
    /// let options = GameOptions::default().with_round_selection(RoundSelection::AllLanguages);
    /// assert_eq!(options.round_selection, RoundSelection::AllLanguages);
    /// ```
    #[must_use]
    pub const fn with_round_selection(mut self, selection: RoundSelection) -> Self {
        self.round_selection = selection;
        self
    }

    /// Sets the number of remaining words kept in card previews.
    ///
    /// # Example
    ///
    /// ```
    /// use wordbingo::GameOptions;
    ///
    /// let options = GameOptions::default().with_preview_words(3);
    /// assert_eq!(options.preview_words, 3);
    /// ```
    #[must_use]
    pub const fn with_preview_words(mut self, count: usize) -> Self {
        self.preview_words = count;
        self
    }
}
