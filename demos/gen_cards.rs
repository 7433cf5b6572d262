//! Writes one CSV file of random test cards per language.
//!
//! Usage: `cargo run --example gen_cards [cards-per-language] [seed]`

use std::fs::File;
use std::io::BufWriter;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordbingo::ingest::write_csv;
use wordbingo::{Card, Language};

const MIN_WORDS: usize = 5;

fn vocabulary(language: Language) -> &'static str {
    match language {
        Language::Spanish => {
            "el la los las un una perro gato casa arbol sol luna agua fuego tierra aire rojo azul \
             verde amarillo blanco negro correr saltar jugar comer dormir reir grande feliz \
             triste amigo familia escuela libro mesa silla"
        }
        Language::English => {
            "the a an cat dog house tree sun moon star sky blue red green yellow black white run \
             jump play eat sleep dream big small fast slow happy sad friend family school book"
        }
        Language::Portuguese => {
            "o a os as um uma cachorro gato casa arvore sol lua agua fogo terra ar vermelho azul \
             verde amarelo branco preto correr pular brincar comer dormir grande pequeno feliz"
        }
        Language::Dutch => {
            "de het een kat hond huis boom zon maan ster hemel blauw rood groen geel zwart wit \
             rennen springen spelen eten slapen groot klein snel blij vriend school boek tafel"
        }
    }
}

fn random_card<R: Rng>(language: Language, number: usize, rng: &mut R) -> Option<Card> {
    let words: Vec<&str> = vocabulary(language).split_whitespace().collect();
    let count = rng.random_range(MIN_WORDS..=language.ceiling().min(words.len()));
    let id = format!("{}{number:06}", language.prefix());

    match Card::new(&id, words.choose_multiple(rng, count).copied()) {
        Ok(card) => Some(card),
        Err(err) => {
            eprintln!("Skipping {id}: {err}");
            None
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let per_language = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(50_usize);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for language in Language::ALL {
        let cards: Vec<Card> = (0..per_language)
            .filter_map(|number| random_card(language, number, &mut rng))
            .collect();

        let path = format!("bingo_test_{}.csv", language.prefix());
        let result = File::create(&path)
            .map_err(Into::into)
            .and_then(|file| write_csv(BufWriter::new(file), &cards));
        match result {
            Ok(()) => println!("Wrote {} card(s) to {path}", cards.len()),
            Err(err) => eprintln!("Failed to write {path}: {err}"),
        }
    }
}
