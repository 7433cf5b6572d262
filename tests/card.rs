//! Card construction and marking tests.

use wordbingo::{Card, CardError, Language, normalize_word};

fn words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{i}")).collect()
}

#[test]
fn valid_ids_are_accepted() {
    let card = Card::new("SP000001", ["sol"]).unwrap();
    assert_eq!(card.id(), "SP000001");
    assert_eq!(card.language(), Language::Spanish);

    let card = Card::new("  dt123456 ", ["zon"]).unwrap();
    assert_eq!(card.id(), "DT123456");
    assert_eq!(card.language(), Language::Dutch);
}

#[test]
fn malformed_ids_are_rejected() {
    for id in ["XX000001", "SP12", "SP0000001", "SP00000A", "", "SP 00001", "ÑP000001"] {
        assert_eq!(
            Card::new(id, ["sol"]).unwrap_err(),
            CardError::InvalidId,
            "id {id:?}"
        );
    }
}

#[test]
fn words_are_normalized_and_deduplicated() {
    let card = Card::new("EN000001", [" Cat ", "cat", "CAT", "", "   "]).unwrap();
    assert_eq!(card.len(), 1);
    assert!(card.words().contains("cat"));
    assert!(card.contains("  CaT"));
}

#[test]
fn empty_word_set_is_rejected() {
    assert_eq!(
        Card::new("PT000001", ["", "  "]).unwrap_err(),
        CardError::EmptyWordSet
    );
    assert_eq!(
        Card::new("PT000001", Vec::<String>::new()).unwrap_err(),
        CardError::EmptyWordSet
    );
}

#[test]
fn ceiling_is_enforced_per_language() {
    assert!(Card::new("EN000001", words(14)).is_ok());
    assert_eq!(
        Card::new("EN000001", words(15)).unwrap_err(),
        CardError::WordLimitExceeded {
            language: Language::English,
            count: 15,
            limit: 14,
        }
    );

    assert!(Card::new("SP000001", words(24)).is_ok());
    assert!(Card::new("SP000001", words(25)).is_err());
    assert!(Card::new("PT000001", words(20)).is_ok());
    assert!(Card::new("PT000001", words(21)).is_err());
    assert!(Card::new("DT000001", words(10)).is_ok());
    assert!(Card::new("DT000001", words(11)).is_err());
}

#[test]
fn ceiling_counts_distinct_words() {
    let mut raw = words(14);
    raw.extend(raw.clone().iter().map(|word| word.to_uppercase()));
    let card = Card::new("EN000001", raw).unwrap();
    assert_eq!(card.len(), 14);
}

#[test]
fn marking_is_idempotent_and_stays_within_words() {
    let mut card = Card::new("SP000001", ["sol", "luna"]).unwrap();

    assert!(card.mark(" SOL "));
    assert!(!card.mark("sol"));
    assert_eq!(card.marked().len(), 1);

    assert!(!card.mark("estrella"));
    assert!(!card.mark(""));
    assert!(card.marked().is_subset(card.words()));
    assert!(card.is_marked("Sol"));
}

#[test]
fn remaining_and_winner_track_marks() {
    let mut card = Card::new("SP000001", ["sol", "luna"]).unwrap();
    assert_eq!(card.remaining_count(), 2);

    card.mark("SOL");
    assert!(!card.is_winner());
    assert_eq!(card.remaining().into_iter().collect::<Vec<_>>(), ["luna"]);

    card.mark("luna");
    assert!(card.is_winner());
    assert!(card.remaining().is_empty());

    card.reset();
    assert!(card.marked().is_empty());
    assert!(!card.is_winner());
}

#[test]
fn normalize_word_trims_and_lowercases() {
    assert_eq!(normalize_word("  LUNA\t").as_deref(), Some("luna"));
    assert_eq!(normalize_word("Árbol").as_deref(), Some("árbol"));
    assert_eq!(normalize_word(" \n "), None);
}

#[test]
fn card_error_messages() {
    let err = Card::new("DT000001", words(11)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "card has 11 words, the limit for DT is 10"
    );
    assert_eq!(CardError::InvalidId.to_string(), "invalid card id");
}
