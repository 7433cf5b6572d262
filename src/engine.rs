//! Word matching and winner detection.
//!
//! These functions operate on any collection of cards and hold no state of
//! their own. [`Game`](crate::Game) uses them with the cards of the active
//! round.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, normalize_word};
use crate::language::Language;

/// Marks `word` on every card, then reports every card that is now a winner.
///
/// All cards are marked before any is checked, so cards completing on the
/// same word are reported together. Winners are returned in the order the
/// cards were supplied. A blank word changes nothing and yields no winners.
///
/// ```
/// use wordbingo::{Card, engine};
///
/// let mut cards = vec![
///     Card::new("EN000001", ["sun"]).unwrap(),
///     Card::new("EN000002", ["sun", "moon"]).unwrap(),
/// ];
/// let winners = engine::apply_announced_word(" SUN ", cards.iter_mut());
/// assert_eq!(winners.len(), 1);
/// assert_eq!(winners[0].id(), "EN000001");
/// ```
pub fn apply_announced_word<'a, I>(word: &str, cards: I) -> Vec<Card>
where
    I: IntoIterator<Item = &'a mut Card>,
{
    let Some(word) = normalize_word(word) else {
        return Vec::new();
    };

    let mut cards: Vec<&mut Card> = cards.into_iter().collect();
    for card in &mut cards {
        card.mark_normalized(&word);
    }

    cards
        .iter()
        .filter(|card| card.is_winner())
        .map(|card| (**card).clone())
        .collect()
}

/// Returns every card that is already a winner, without marking anything.
pub fn sweep_winners<'a, I>(cards: I) -> Vec<Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .filter(|card| card.is_winner())
        .cloned()
        .collect()
}

/// Returns the distinct languages of `cards` in canonical order.
pub fn present_languages<'a, I>(cards: I) -> Vec<Language>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut languages: Vec<Language> = cards.into_iter().map(Card::language).collect();
    languages.sort_unstable();
    languages.dedup();
    languages
}

/// Shuffles a round order with the given random source.
pub fn shuffle_languages<R: Rng + ?Sized>(languages: &mut [Language], rng: &mut R) {
    languages.shuffle(rng);
}

/// Returns every id shared by two or more cards, sorted, each listed once.
pub fn duplicate_ids<'a, I>(cards: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut ids: Vec<&str> = cards.into_iter().map(Card::id).collect();
    ids.sort_unstable();

    let mut duplicates: Vec<String> = ids
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| String::from(pair[0]))
        .collect();
    duplicates.dedup();
    duplicates
}
