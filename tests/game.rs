//! Game session integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wordbingo::{
    AnnounceError, Card, FinishReason, Game, GameOptions, GameState, Input, InputError,
    InputOutcome, Language, RegistryError, RoundEnd, RoundError, RoundSelection, StartError,
};

fn card(id: &str, words: &[&str]) -> Card {
    Card::new(id, words.iter().copied()).unwrap()
}

fn ordered() -> GameOptions {
    GameOptions::default().with_shuffle_rounds(false)
}

fn game_with(cards: Vec<Card>) -> Game {
    let game = Game::new(ordered(), 1);
    let outcome = game.add_cards(cards).unwrap();
    assert!(outcome.duplicates.is_empty());
    game
}

#[test]
fn end_to_end_single_card() {
    let game = game_with(vec![card("SP000001", &["sol", "luna"])]);
    assert_eq!(game.start_game().unwrap(), Language::Spanish);

    let first = game.announce("SOL").unwrap();
    assert!(first.winners.is_empty());
    assert_eq!(first.matched, 1);
    let card = game.card("SP000001").unwrap();
    assert!(!card.is_winner());
    assert_eq!(card.remaining().into_iter().collect::<Vec<_>>(), ["luna"]);

    let second = game.announce("luna").unwrap();
    assert!(second.has_winners());
    assert_eq!(second.winners[0].id(), "SP000001");
    assert!(second.winners[0].is_winner());
    assert_eq!(game.state(), GameState::Finished(FinishReason::Winners));
}

#[test]
fn announcing_requires_an_active_round() {
    let game = game_with(vec![card("SP000001", &["sol"])]);
    assert_eq!(
        game.announce("sol").unwrap_err(),
        AnnounceError::SessionNotStarted
    );
    assert_eq!(game.end_round().unwrap_err(), RoundError::SessionNotStarted);
    assert_eq!(game.stop().unwrap_err(), RoundError::SessionNotStarted);
    assert!(game.card("SP000001").unwrap().marked().is_empty());
}

#[test]
fn start_requires_cards() {
    let game = Game::new(ordered(), 1);
    assert_eq!(game.start_game().unwrap_err(), StartError::NoCards);
    assert_eq!(game.state(), GameState::NotStarted);
}

#[test]
fn start_reports_every_duplicated_id() {
    let game = Game::from_cards(
        ordered(),
        1,
        vec![
            card("SP000001", &["sol"]),
            card("EN000001", &["sun"]),
            card("SP000001", &["luna"]),
            card("EN000001", &["moon"]),
            card("DT000001", &["zon"]),
        ],
    );

    let err = game.start_game().unwrap_err();
    assert_eq!(
        err,
        StartError::DuplicateIds(vec!["EN000001".into(), "SP000001".into()])
    );
    assert_eq!(err.to_string(), "duplicate card ids: EN000001, SP000001");
    assert_eq!(game.state(), GameState::NotStarted);

    let removed = game.remove_duplicates().unwrap();
    assert_eq!(removed.len(), 2);
    assert!(game.card("SP000001").unwrap().contains("sol"));
    assert!(game.start_game().is_ok());
}

#[test]
fn duplicate_registration_keeps_existing_card() {
    let game = Game::new(ordered(), 1);
    game.add_card(card("SP000001", &["sol"])).unwrap();

    assert_eq!(
        game.add_card(card("sp000001", &["luna"])).unwrap_err(),
        RegistryError::DuplicateId("SP000001".into())
    );

    let outcome = game
        .add_cards(vec![
            card("SP000001", &["mar"]),
            card("SP000002", &["rio"]),
            card("SP000002", &["pan"]),
        ])
        .unwrap();
    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.duplicates, ["SP000001", "SP000002"]);

    assert_eq!(game.card_count(), 2);
    assert!(game.card("SP000001").unwrap().contains("sol"));
    assert!(game.card("SP000002").unwrap().contains("rio"));
}

#[test]
fn rounds_are_isolated_by_language() {
    let game = game_with(vec![card("SP000001", &["sol"]), card("EN000001", &["cat"])]);
    assert_eq!(game.start_game().unwrap(), Language::Spanish);

    let announcement = game.announce("cat").unwrap();
    assert_eq!(announcement.matched, 0);
    assert!(announcement.winners.is_empty());
    assert!(game.card("EN000001").unwrap().marked().is_empty());
    assert_eq!(game.current_language(), Some(Language::Spanish));
}

#[test]
fn end_round_advances_then_exhausts() {
    let game = game_with(vec![
        card("DT000001", &["zon", "maan"]),
        card("SP000001", &["sol", "luna"]),
    ]);
    assert_eq!(game.start_game().unwrap(), Language::Spanish);
    assert_eq!(game.round_order(), [Language::Spanish, Language::Dutch]);
    assert_eq!(game.upcoming_rounds(), [Language::Dutch]);
    assert_eq!(game.round_cards(), 1);

    game.announce("sol").unwrap();
    assert_eq!(
        game.end_round().unwrap(),
        RoundEnd::NextRound(Language::Dutch)
    );
    assert_eq!(game.state(), GameState::RoundActive(Language::Dutch));
    assert!(game.upcoming_rounds().is_empty());

    assert_eq!(game.end_round().unwrap(), RoundEnd::Exhausted);
    assert_eq!(game.state(), GameState::Finished(FinishReason::Exhausted));
    assert_eq!(
        game.announce("zon").unwrap_err(),
        AnnounceError::SessionNotStarted
    );
}

#[test]
fn end_round_sweeps_winners_marked_outside_the_engine() {
    let game = game_with(vec![
        card("EN000001", &["sun", "moon"]),
        card("PT000001", &["sol"]),
    ]);
    assert_eq!(game.start_game().unwrap(), Language::English);

    // Resumed state: marks restored directly on the card.
    for card in game.cards.lock().iter_mut() {
        card.mark("sun");
        card.mark("moon");
    }

    match game.end_round().unwrap() {
        RoundEnd::Winners(winners) => {
            assert_eq!(winners.len(), 1);
            assert_eq!(winners[0].id(), "EN000001");
        }
        other => panic!("expected winners, got {other:?}"),
    }
    assert_eq!(game.state(), GameState::Finished(FinishReason::Winners));
    assert_eq!(game.winner_history()[0].id, "EN000001");
}

#[test]
fn stop_finishes_from_any_round() {
    let game = game_with(vec![card("SP000001", &["sol"]), card("EN000001", &["sun"])]);
    game.start_game().unwrap();
    game.stop().unwrap();
    assert_eq!(game.state(), GameState::Finished(FinishReason::Stopped));
    assert_eq!(game.stop().unwrap_err(), RoundError::SessionNotStarted);
}

#[test]
fn winners_end_the_game_even_with_rounds_left() {
    let game = game_with(vec![card("SP000001", &["sol"]), card("EN000001", &["sun"])]);
    game.start_game().unwrap();
    assert!(game.announce("sol").unwrap().has_winners());
    assert_eq!(game.state(), GameState::Finished(FinishReason::Winners));
    assert_eq!(game.current_language(), None);
    assert!(game.upcoming_rounds().is_empty());
}

#[test]
fn new_game_clears_marks() {
    let game = game_with(vec![card("SP000001", &["sol", "luna"])]);
    game.start_game().unwrap();
    game.announce("sol").unwrap();
    game.stop().unwrap();
    assert_eq!(game.card("SP000001").unwrap().marked().len(), 1);

    game.start_game().unwrap();
    assert!(game.card("SP000001").unwrap().marked().is_empty());
    assert_eq!(game.game_number(), 2);
}

#[test]
fn start_is_rejected_while_a_round_is_active() {
    let game = game_with(vec![card("SP000001", &["sol", "luna"])]);
    game.start_game().unwrap();
    assert_eq!(game.start_game().unwrap_err(), StartError::GameInProgress);
    assert_eq!(
        game.add_card(card("SP000002", &["mar"])).unwrap_err(),
        RegistryError::GameInProgress
    );
    assert_eq!(
        game.remove_card("SP000001").unwrap_err(),
        RegistryError::GameInProgress
    );
    assert!(!game.is_idle());
}

#[test]
fn marks_are_monotonic_within_a_game() {
    let game = game_with(vec![card("PT000001", &["sol", "lua", "mar", "rio"])]);
    game.start_game().unwrap();

    let mut previous = 0;
    for word in ["sol", "sol", "ceu", "lua", "LUA", "mar"] {
        game.announce(word).unwrap();
        let card = game.card("PT000001").unwrap();
        assert!(card.marked().len() >= previous);
        assert!(card.marked().is_subset(card.words()));
        previous = card.marked().len();
    }
    assert_eq!(previous, 3);
}

#[test]
fn blank_announcement_is_a_no_op() {
    let game = game_with(vec![card("SP000001", &["sol"])]);
    game.start_game().unwrap();
    let announcement = game.announce("   ").unwrap();
    assert_eq!(announcement.word, None);
    assert_eq!(announcement.matched, 0);
    assert_eq!(game.state(), GameState::RoundActive(Language::Spanish));
}

#[test]
fn all_languages_selection_skips_empty_rounds() {
    let options = ordered().with_round_selection(RoundSelection::AllLanguages);
    let game = Game::new(options, 1);
    game.add_card(card("EN000001", &["sun"])).unwrap();
    game.add_card(card("DT000001", &["zon"])).unwrap();

    assert_eq!(game.start_game().unwrap(), Language::English);
    assert_eq!(game.round_order(), Language::ALL);
    assert_eq!(game.upcoming_rounds(), [Language::Dutch]);
    assert_eq!(
        game.end_round().unwrap(),
        RoundEnd::NextRound(Language::Dutch)
    );
    assert_eq!(game.end_round().unwrap(), RoundEnd::Exhausted);
}

#[test]
fn injected_rng_shuffles_present_languages() {
    let game = Game::new(GameOptions::default(), 0);
    game.add_cards(vec![
        card("SP000001", &["sol"]),
        card("EN000001", &["sun"]),
        card("PT000001", &["sol"]),
    ])
    .unwrap();

    let first = game
        .start_game_with(&mut ChaCha8Rng::seed_from_u64(3))
        .unwrap();
    let order = game.round_order();
    assert_eq!(order[0], first);
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        [Language::Spanish, Language::English, Language::Portuguese]
    );

    game.stop().unwrap();
    game.start_game_with(&mut ChaCha8Rng::seed_from_u64(3))
        .unwrap();
    assert_eq!(game.round_order(), order);
}

#[test]
fn same_seed_gives_same_round_order() {
    let cards = || {
        vec![
            card("SP000001", &["sol"]),
            card("EN000001", &["sun"]),
            card("PT000001", &["sol"]),
            card("DT000001", &["zon"]),
        ]
    };
    let a = Game::from_cards(GameOptions::default(), 99, cards());
    let b = Game::from_cards(GameOptions::default(), 99, cards());
    a.start_game().unwrap();
    b.start_game().unwrap();
    assert_eq!(a.round_order(), b.round_order());
}

#[test]
fn handle_routes_words_and_signals() {
    let game = game_with(vec![card("SP000001", &["sol", "luna"]), card("EN000001", &["sun"])]);
    assert_eq!(
        game.handle(Input::EndRound).unwrap_err(),
        InputError::Round(RoundError::SessionNotStarted)
    );

    game.start_game().unwrap();
    let outcome = game.handle(Input::parse("Sol").unwrap()).unwrap();
    assert!(matches!(outcome, InputOutcome::Announced(ref a) if a.matched == 1));

    let outcome = game.handle(Input::parse("end").unwrap()).unwrap();
    assert_eq!(
        outcome,
        InputOutcome::RoundEnded(RoundEnd::NextRound(Language::English))
    );

    assert_eq!(
        game.handle(Input::parse("STOP").unwrap()).unwrap(),
        InputOutcome::Stopped
    );
    assert_eq!(
        game.handle(Input::Word("sun".into())).unwrap_err(),
        InputError::Announce(AnnounceError::SessionNotStarted)
    );
}

#[test]
fn stats_and_card_status() {
    let game = game_with(vec![
        card("SP000001", &["sol", "luna", "mar"]),
        card("SP000002", &["sol"]),
        card("DT000001", &["zon"]),
    ]);
    game.start_game().unwrap();
    game.announce("sol").unwrap();

    let stats = game.stats();
    assert_eq!(stats.total_cards, 3);
    assert_eq!(
        stats.per_language,
        [(Language::Spanish, 2), (Language::Dutch, 1)]
    );
    assert_eq!(stats.winners, ["SP000002"]);

    let status = game.card_status("sp000001").unwrap();
    assert_eq!(status.marked, ["sol"]);
    assert_eq!(status.remaining, ["luna", "mar"]);
    assert_eq!(status.total(), 3);
    assert!(!status.is_winner);
    assert_eq!(status.preview(1), (&["luna".to_string()][..], true));
    assert!(game.card_status("SP999999").is_none());
    assert_eq!(game.card_statuses().len(), 3);
}

#[test]
fn winner_history_spans_games() {
    let game = game_with(vec![card("SP000001", &["sol"]), card("SP000002", &["sol"])]);
    game.start_game().unwrap();
    game.announce("sol").unwrap();
    game.start_game().unwrap();
    game.announce("sol").unwrap();

    let history = game.winner_history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].game_number, 1);
    assert_eq!(history[3].game_number, 2);
    assert_eq!(history[1].id, "SP000002");
    assert_eq!(history[1].language, Language::Spanish);

    game.clear_history();
    assert!(game.winner_history().is_empty());
}

#[test]
fn registry_edits_between_games() {
    let game = game_with(vec![card("SP000001", &["sol"]), card("EN000001", &["sun"])]);
    let removed = game.remove_card(" en000001 ").unwrap();
    assert_eq!(removed.id(), "EN000001");
    assert_eq!(
        game.remove_card("EN000001").unwrap_err(),
        RegistryError::CardNotFound
    );
    assert_eq!(
        game.remove_card("bogus").unwrap_err(),
        RegistryError::CardNotFound
    );

    game.start_game().unwrap();
    game.stop().unwrap();
    game.clear_cards().unwrap();
    assert_eq!(game.card_count(), 0);
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.round_order().is_empty());
}

#[test]
fn game_is_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Game>();

    let game = std::sync::Arc::new(game_with(vec![card("SP000001", &["sol", "luna"])]));
    game.start_game().unwrap();

    let handles: Vec<_> = ["sol", "luna"]
        .into_iter()
        .map(|word| {
            let game = std::sync::Arc::clone(&game);
            std::thread::spawn(move || game.announce(word))
        })
        .collect();
    let winners: usize = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().map_or(0, |a| a.winners.len()))
        .sum();

    assert_eq!(winners, 1);
    assert_eq!(game.state(), GameState::Finished(FinishReason::Winners));
}

#[test]
fn debug_output_does_not_block_on_held_locks() {
    let game = game_with(vec![card("SP000001", &["sol"])]);
    assert!(format!("{game:?}").contains("SP000001"));

    let _cards = game.cards.lock();
    let shown = format!("{game:?}");
    assert!(shown.contains("<locked>"));
    assert!(shown.contains("NotStarted"));
}
