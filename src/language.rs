//! Card languages and their word ceilings.

use core::fmt;

/// Language of a card, taken from the two-letter prefix of its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    /// Spanish (`SP`).
    Spanish,
    /// English (`EN`).
    English,
    /// Portuguese (`PT`).
    Portuguese,
    /// Dutch (`DT`).
    Dutch,
}

impl Language {
    /// All languages in canonical round order.
    pub const ALL: [Self; 4] = [Self::Spanish, Self::English, Self::Portuguese, Self::Dutch];

    /// Parses a two-letter prefix, ignoring ASCII case.
    ///
    /// ```
    /// use wordbingo::Language;
    ///
    /// assert_eq!(Language::from_prefix("en"), Some(Language::English));
    /// assert_eq!(Language::from_prefix("XX"), None);
    /// ```
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.prefix().eq_ignore_ascii_case(prefix))
    }

    /// Returns the identifier prefix.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Spanish => "SP",
            Self::English => "EN",
            Self::Portuguese => "PT",
            Self::Dutch => "DT",
        }
    }

    /// Maximum number of distinct words a card of this language may hold.
    #[must_use]
    pub const fn ceiling(self) -> usize {
        match self {
            Self::Spanish => 24,
            Self::English => 14,
            Self::Portuguese => 20,
            Self::Dutch => 10,
        }
    }

    /// Human-readable language name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spanish => "Spanish",
            Self::English => "English",
            Self::Portuguese => "Portuguese",
            Self::Dutch => "Dutch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
