//! Bingo cards and word normalization.

use alloc::collections::BTreeSet;
use alloc::string::String;

use crate::error::CardError;
use crate::language::Language;

/// Number of digits following the language prefix in a card identifier.
pub const ID_DIGITS: usize = 6;

/// Normalizes a word for matching: trims surrounding whitespace and lowercases.
///
/// Returns `None` when nothing is left after trimming.
///
/// ```
/// use wordbingo::normalize_word;
///
/// assert_eq!(normalize_word("  Sol ").as_deref(), Some("sol"));
/// assert_eq!(normalize_word("   "), None);
/// ```
#[must_use]
pub fn normalize_word(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Parses a card identifier of the form `<LANG><6 digits>`.
///
/// The prefix is matched case-insensitively and surrounding whitespace is
/// ignored. Returns the canonical identifier (uppercase prefix) and its
/// language.
///
/// # Errors
///
/// Returns [`CardError::InvalidId`] if the identifier is malformed or names an
/// unknown language.
pub fn parse_id(raw: &str) -> Result<(String, Language), CardError> {
    let id = raw.trim();
    if id.len() != 2 + ID_DIGITS || !id.is_ascii() {
        return Err(CardError::InvalidId);
    }

    let (prefix, digits) = id.split_at(2);
    let language = Language::from_prefix(prefix).ok_or(CardError::InvalidId)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardError::InvalidId);
    }

    let mut canonical = String::with_capacity(id.len());
    canonical.push_str(language.prefix());
    canonical.push_str(digits);
    Ok((canonical, language))
}

/// A player's card: a fixed set of words and the subset marked so far.
///
/// The identifier and word set never change after construction. Only the
/// marked set evolves, and it is always a subset of the word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Canonical identifier, e.g. `SP000001`.
    id: String,
    /// Language derived from the identifier prefix.
    language: Language,
    /// Normalized words.
    words: BTreeSet<String>,
    /// Words marked in the current game.
    marked: BTreeSet<String>,
}

impl Card {
    /// Creates a validated card.
    ///
    /// Words are trimmed, lowercased, and deduplicated; empty entries are
    /// dropped.
    ///
    /// ```
    /// use wordbingo::Card;
    ///
    /// let card = Card::new("SP000001", [" Cat ", "cat", "CAT"]).unwrap();
    /// assert_eq!(card.len(), 1);
    /// assert!(card.contains("cat"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is invalid, no usable words remain,
    /// or the word count exceeds the language ceiling.
    pub fn new<I>(id: &str, raw_words: I) -> Result<Self, CardError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let (id, language) = parse_id(id)?;

        let words: BTreeSet<String> = raw_words
            .into_iter()
            .filter_map(|word| normalize_word(word.as_ref()))
            .collect();

        if words.is_empty() {
            return Err(CardError::EmptyWordSet);
        }

        let limit = language.ceiling();
        if words.len() > limit {
            return Err(CardError::WordLimitExceeded {
                language,
                count: words.len(),
                limit,
            });
        }

        Ok(Self {
            id,
            language,
            words,
            marked: BTreeSet::new(),
        })
    }

    /// Returns the card identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the card language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the normalized words.
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Returns the words marked so far.
    #[must_use]
    pub const fn marked(&self) -> &BTreeSet<String> {
        &self.marked
    }

    /// Returns the number of words on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; construction rejects empty cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns whether the card holds `word` (after normalization).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        normalize_word(word).is_some_and(|word| self.words.contains(&word))
    }

    /// Returns whether `word` (after normalization) is marked.
    #[must_use]
    pub fn is_marked(&self, word: &str) -> bool {
        normalize_word(word).is_some_and(|word| self.marked.contains(&word))
    }

    /// Marks a word if the card holds it.
    ///
    /// Unknown or already-marked words are ignored. Returns `true` if the
    /// word was newly marked.
    pub fn mark(&mut self, word: &str) -> bool {
        normalize_word(word).is_some_and(|word| self.mark_normalized(&word))
    }

    /// Marks an already normalized word.
    pub(crate) fn mark_normalized(&mut self, word: &str) -> bool {
        if self.words.contains(word) && !self.marked.contains(word) {
            self.marked.insert(String::from(word));
            true
        } else {
            false
        }
    }

    /// Returns whether every word on the card is marked.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.marked == self.words
    }

    /// Returns the words not yet marked.
    #[must_use]
    pub fn remaining(&self) -> BTreeSet<String> {
        self.words.difference(&self.marked).cloned().collect()
    }

    /// Returns the number of words not yet marked.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.words.len() - self.marked.len()
    }

    /// Clears all marks for a new game.
    pub fn reset(&mut self) {
        self.marked.clear();
    }
}
