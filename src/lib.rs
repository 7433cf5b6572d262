//! A word bingo engine with optional `no_std` support.
//!
//! Players hold [`Card`]s of words in one language. A [`Game`] plays one
//! round per language in random order; the announcer calls words, every card
//! of the active round marks them, and the game ends as soon as a card has
//! all of its words marked.
//!
//! # Example
//!
//! ```
//! use wordbingo::{Card, Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.add_card(Card::new("SP000001", ["sol", "luna"]).unwrap()).unwrap();
//! game.start_game().unwrap();
//!
//! assert!(game.announce("SOL").unwrap().winners.is_empty());
//! let announcement = game.announce("luna").unwrap();
//! assert_eq!(announcement.winners[0].id(), "SP000001");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod command;
pub mod engine;
pub mod error;
pub mod game;
pub mod ingest;
pub mod language;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, normalize_word};
pub use command::Input;
pub use error::{
    AnnounceError, CardError, InputError, LineError, LineErrorKind, RegistryError, RoundError,
    StartError,
};
#[cfg(feature = "std")]
pub use error::IngestError;
pub use game::{FinishReason, Game, GameState};
pub use language::Language;
pub use options::{GameOptions, RoundSelection};
pub use result::{
    Announcement, BatchAdd, CardStatus, InputOutcome, RoundEnd, Stats, WinnerRecord,
};
