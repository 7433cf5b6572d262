//! CLI word bingo example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use wordbingo::ingest::load_path;
use wordbingo::{Card, Game, GameOptions, GameState, Input, InputOutcome, Language, RoundEnd};

fn main() {
    env_logger::init();

    println!("Word bingo CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        println!();
        println!(" 1) Load cards from file (.txt or .csv)");
        println!(" 2) Add a card");
        println!(" 3) List cards");
        println!(" 4) Start game");
        println!(" 5) Card status");
        println!(" 6) Statistics");
        println!(" 7) Winner history");
        println!(" 8) Remove all cards");
        println!(" q) Quit");

        match prompt_line("Choice: ").as_str() {
            "1" => load_cards(&game),
            "2" => add_card(&game),
            "3" => list_cards(&game),
            "4" => play(&game),
            "5" => show_card(&game),
            "6" => print_stats(&game),
            "7" => print_history(&game),
            "8" => match game.clear_cards() {
                Ok(()) => println!("All cards removed."),
                Err(err) => println!("Error: {err}"),
            },
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Unknown option."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_string(),
        Err(_) => String::new(),
    }
}

fn load_cards(game: &Game) {
    let path = prompt_line("Path: ");
    let parsed = match load_path(&path) {
        Ok(parsed) => parsed,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    for error in &parsed.errors {
        println!("{}", colorize(&format!("Skipped {error}"), "33"));
    }

    match game.add_cards(parsed.cards) {
        Ok(outcome) => {
            if !outcome.duplicates.is_empty() {
                println!(
                    "Already registered, not added: {}",
                    outcome.duplicates.join(", ")
                );
            }
            println!("{} card(s) added.", outcome.added);
        }
        Err(err) => println!("Error: {err}"),
    }
}

fn add_card(game: &Game) {
    let id = prompt_line("Card id (e.g. SP000001): ");
    let words = prompt_line("Words (space separated): ");

    let card = match Card::new(&id, words.split_whitespace()) {
        Ok(card) => card,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    match game.add_card(card) {
        Ok(()) => println!("Card added."),
        Err(err) => println!("Error: {err}"),
    }
}

fn list_cards(game: &Game) {
    let cards = game.cards();
    if cards.is_empty() {
        println!("No cards registered.");
        return;
    }

    println!("Registered cards ({}):", cards.len());
    for card in &cards {
        println!(
            " - {} ({}) {}/{} marked",
            card.id(),
            card.language(),
            card.marked().len(),
            card.len()
        );
    }
}

fn show_card(game: &Game) {
    let id = prompt_line("Card id: ");
    let Some(status) = game.card_status(&id) else {
        println!("Card not found.");
        return;
    };

    println!(
        "\n{} ({}) progress {}/{}",
        status.id,
        status.language.name(),
        status.marked.len(),
        status.total()
    );
    for word in &status.marked {
        println!("  {} {word}", colorize("x", "32"));
    }
    for word in &status.remaining {
        println!("  {} {word}", colorize("o", "90"));
    }
    if status.is_winner {
        println!("{}", colorize("BINGO!", "32"));
    }
}

fn print_stats(game: &Game) {
    let stats = game.stats();
    println!("\nTotal cards: {}", stats.total_cards);
    for (language, count) in &stats.per_language {
        println!("  {}: {count}", language.name());
    }
    println!("Winners: {}", stats.winners.len());
    for id in &stats.winners {
        println!("  {id}");
    }
}

fn print_history(game: &Game) {
    let history = game.winner_history();
    if history.is_empty() {
        println!("No winners yet.");
        return;
    }
    for record in history.iter().rev() {
        println!("Game {}: {} ({})", record.game_number, record.id, record.language);
    }
}

fn play(game: &Game) {
    let first = match game.start_game() {
        Ok(language) => language,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    println!("\nRound order: {}", format_order(&game.round_order()));
    println!("Type a word to announce it, 'END' to end the round, 'STOP' to stop the game.");
    announce_round(game, first);

    while let GameState::RoundActive(language) = game.state() {
        let Some(input) = Input::parse(&prompt_line("Word: ")) else {
            continue;
        };

        match game.handle(input) {
            Ok(InputOutcome::Announced(announcement)) => {
                if announcement.has_winners() {
                    print_winners(&announcement.winners);
                } else {
                    println!("Marked on {} card(s).", announcement.matched);
                }
            }
            Ok(InputOutcome::RoundEnded(RoundEnd::Winners(winners))) => print_winners(&winners),
            Ok(InputOutcome::RoundEnded(RoundEnd::NextRound(next))) => {
                println!("No winners in round {language}.");
                announce_round(game, next);
            }
            Ok(InputOutcome::RoundEnded(RoundEnd::Exhausted)) => {
                println!("All rounds played. No winners.");
                print_remaining(game);
            }
            Ok(InputOutcome::Stopped) => println!("Game stopped."),
            Err(err) => println!("Error: {err}"),
        }
    }
}

fn announce_round(game: &Game, language: Language) {
    println!(
        "\n--- Round {} ({}) : {} card(s) ---",
        language,
        language.name(),
        game.round_cards()
    );
}

fn print_winners(winners: &[Card]) {
    println!("\n{}", colorize("=== WINNERS ===", "32"));
    for card in winners {
        println!("{} ({})", card.id(), card.language());
    }
}

fn print_remaining(game: &Game) {
    if !matches!(prompt_line("Show final card status? (y/n): ").as_str(), "y" | "yes") {
        return;
    }

    let limit = game.options.preview_words;
    for status in game.card_statuses() {
        let (shown, more) = status.preview(limit);
        println!(
            "{} ({}) - {} left: {}{}",
            status.id,
            status.language,
            status.remaining.len(),
            shown.join(", "),
            if more { "..." } else { "" }
        );
    }
}

fn format_order(order: &[Language]) -> String {
    order
        .iter()
        .map(|language| colorize(language.prefix(), "36"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
