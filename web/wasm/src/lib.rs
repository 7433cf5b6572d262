use serde::Serialize;
use wasm_bindgen::prelude::*;
use wordbingo::ingest::parse_text;
use wordbingo::{
    Announcement, Card, CardStatus, FinishReason, Game, GameOptions, GameState, Input,
    InputOutcome, Language, RoundEnd, WinnerRecord,
};

#[wasm_bindgen]
pub struct WasmBingo {
    game: Game,
}

#[wasm_bindgen]
impl WasmBingo {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), u64::from(seed)),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), u64::from(seed));
    }

    pub fn add_card(&self, id: &str, words: &str) -> Result<(), JsValue> {
        let card = Card::new(id, words.split_whitespace()).map_err(js_err)?;
        self.game.add_card(card).map_err(js_err)
    }

    /// Loads `ID word1 word2 ...` lines and returns a load report.
    pub fn load_text(&self, text: &str) -> Result<JsValue, JsValue> {
        let parsed = parse_text(text);
        let errors = parsed.errors.iter().map(|error| error.to_string()).collect();
        let outcome = self.game.add_cards(parsed.cards).map_err(js_err)?;

        to_js_value(&LoadReport {
            added: outcome.added as u32,
            duplicates: outcome.duplicates,
            errors,
        })
    }

    pub fn remove_card(&self, id: &str) -> Result<(), JsValue> {
        self.game.remove_card(id).map(|_| ()).map_err(js_err)
    }

    pub fn clear_cards(&self) -> Result<(), JsValue> {
        self.game.clear_cards().map_err(js_err)
    }

    pub fn start_game(&self) -> Result<String, JsValue> {
        self.game
            .start_game()
            .map(|language| language.prefix().to_string())
            .map_err(js_err)
    }

    pub fn announce(&self, word: &str) -> Result<JsValue, JsValue> {
        let announcement = self.game.announce(word).map_err(js_err)?;
        to_js_value(&JsAnnouncement::from(announcement))
    }

    /// Applies a raw input line: a word, `END`, or `STOP`.
    pub fn input(&self, line: &str) -> Result<JsValue, JsValue> {
        let Some(input) = Input::parse(line) else {
            return Ok(JsValue::NULL);
        };
        let outcome = self.game.handle(input).map_err(js_err)?;
        to_js_value(&JsOutcome::from(outcome))
    }

    pub fn end_round(&self) -> Result<JsValue, JsValue> {
        let end = self.game.end_round().map_err(js_err)?;
        to_js_value(&JsRoundEnd::from(end))
    }

    pub fn stop(&self) -> Result<(), JsValue> {
        self.game.stop().map_err(js_err)
    }

    pub fn card_status(&self, id: &str) -> Result<JsValue, JsValue> {
        match self.game.card_status(id) {
            Some(status) => to_js_value(&JsCardStatus::from(status)),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn history(&self) -> Result<JsValue, JsValue> {
        let history: Vec<JsWinner> = self
            .game
            .winner_history()
            .into_iter()
            .map(JsWinner::from)
            .collect();
        to_js_value(&history)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let stats = self.game.stats();
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            game_number: self.game.game_number(),
            round: self.game.current_language().map(Language::prefix),
            round_order: self
                .game
                .round_order()
                .into_iter()
                .map(Language::prefix)
                .collect(),
            round_cards: self.game.round_cards() as u32,
            cards: self
                .game
                .cards()
                .iter()
                .map(JsCard::from_card)
                .collect(),
            per_language: stats
                .per_language
                .into_iter()
                .map(|(language, count)| (language.prefix(), count as u32))
                .collect(),
            winners: stats.winners,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    game_number: u32,
    round: Option<&'static str>,
    round_order: Vec<&'static str>,
    round_cards: u32,
    cards: Vec<JsCard>,
    per_language: Vec<(&'static str, u32)>,
    winners: Vec<String>,
}

#[derive(Serialize)]
struct LoadReport {
    added: u32,
    duplicates: Vec<String>,
    errors: Vec<String>,
}

#[derive(Serialize)]
struct JsCard {
    id: String,
    language: &'static str,
    words: u32,
    marked: u32,
    is_winner: bool,
}

impl JsCard {
    fn from_card(card: &Card) -> Self {
        Self {
            id: card.id().to_string(),
            language: card.language().prefix(),
            words: card.len() as u32,
            marked: card.marked().len() as u32,
            is_winner: card.is_winner(),
        }
    }
}

#[derive(Serialize)]
struct JsAnnouncement {
    word: Option<String>,
    matched: u32,
    winners: Vec<JsCard>,
}

impl From<Announcement> for JsAnnouncement {
    fn from(announcement: Announcement) -> Self {
        Self {
            word: announcement.word,
            matched: announcement.matched as u32,
            winners: announcement.winners.iter().map(JsCard::from_card).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundEnd {
    winners: Vec<JsCard>,
    next_round: Option<&'static str>,
    finished: bool,
}

impl From<RoundEnd> for JsRoundEnd {
    fn from(end: RoundEnd) -> Self {
        match end {
            RoundEnd::Winners(winners) => Self {
                winners: winners.iter().map(JsCard::from_card).collect(),
                next_round: None,
                finished: true,
            },
            RoundEnd::NextRound(language) => Self {
                winners: Vec::new(),
                next_round: Some(language.prefix()),
                finished: false,
            },
            RoundEnd::Exhausted => Self {
                winners: Vec::new(),
                next_round: None,
                finished: true,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsOutcome {
    Announced(JsAnnouncement),
    RoundEnded(JsRoundEnd),
    Stopped,
}

impl From<InputOutcome> for JsOutcome {
    fn from(outcome: InputOutcome) -> Self {
        match outcome {
            InputOutcome::Announced(announcement) => Self::Announced(announcement.into()),
            InputOutcome::RoundEnded(end) => Self::RoundEnded(end.into()),
            InputOutcome::Stopped => Self::Stopped,
        }
    }
}

#[derive(Serialize)]
struct JsCardStatus {
    id: String,
    language: &'static str,
    marked: Vec<String>,
    remaining: Vec<String>,
    is_winner: bool,
}

impl From<CardStatus> for JsCardStatus {
    fn from(status: CardStatus) -> Self {
        Self {
            id: status.id,
            language: status.language.prefix(),
            marked: status.marked,
            remaining: status.remaining,
            is_winner: status.is_winner,
        }
    }
}

#[derive(Serialize)]
struct JsWinner {
    id: String,
    language: &'static str,
    game_number: u32,
}

impl From<WinnerRecord> for JsWinner {
    fn from(record: WinnerRecord) -> Self {
        Self {
            id: record.id,
            language: record.language.prefix(),
            game_number: record.game_number,
        }
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "NotStarted",
        GameState::RoundActive(_) => "RoundActive",
        GameState::Finished(FinishReason::Winners) => "FinishedWithWinners",
        GameState::Finished(FinishReason::Exhausted) => "FinishedExhausted",
        GameState::Finished(FinishReason::Stopped) => "Stopped",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
