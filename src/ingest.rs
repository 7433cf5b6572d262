//! Card ingestion from text and CSV sources.
//!
//! Parsers never stop at a bad record. Every rejected record is reported with
//! its line number next to the cards that were built, and the caller decides
//! whether to keep the good ones or give up.

use alloc::string::String;
use alloc::vec::Vec;

use log::warn;

use crate::card::Card;
use crate::error::{LineError, LineErrorKind};

/// Header names accepted for the id column, compared case-insensitively.
pub const ID_HEADERS: [&str; 2] = ["id", "identificador"];
/// Header names accepted for the words column, compared case-insensitively.
pub const WORDS_HEADERS: [&str; 3] = ["words", "palabras", "conjunto de palabras"];

/// Cards read from one source and the records that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Valid cards, in source order.
    pub cards: Vec<Card>,
    /// Rejected records, in source order.
    pub errors: Vec<LineError>,
}

impl Parsed {
    /// Builds a card from one record and files it as accepted or rejected.
    fn push<'a, I>(&mut self, line: usize, id: &str, words: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let kind = match Card::new(id, words) {
            Ok(card) if self.cards.iter().any(|seen| seen.id() == card.id()) => {
                LineErrorKind::DuplicateId(String::from(card.id()))
            }
            Ok(card) => {
                self.cards.push(card);
                return;
            }
            Err(err) => LineErrorKind::Card(err),
        };
        self.reject(line, kind);
    }

    fn reject(&mut self, line: usize, kind: LineErrorKind) {
        let error = LineError { line, kind };
        warn!("skipping record: {error}");
        self.errors.push(error);
    }

    /// Returns whether every record was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses line-oriented text where each line is `ID word1 word2 ...`.
///
/// Blank lines are skipped. Tokens are separated by any whitespace.
///
/// ```
/// use wordbingo::ingest::parse_text;
///
/// let parsed = parse_text("SP000001 sol luna\n\nEN000001\n");
/// assert_eq!(parsed.cards.len(), 1);
/// assert_eq!(parsed.errors[0].line, 3);
/// ```
#[must_use]
pub fn parse_text(text: &str) -> Parsed {
    let mut parsed = Parsed::default();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let mut tokens = line.split_whitespace();
        let Some(id) = tokens.next() else {
            continue;
        };

        let words: Vec<&str> = tokens.collect();
        if words.is_empty() {
            parsed.reject(line_no, LineErrorKind::Malformed);
            continue;
        }
        parsed.push(line_no, id, words);
    }

    parsed
}

#[cfg(feature = "std")]
pub use self::file::{load_path, parse_csv, write_csv};

#[cfg(feature = "std")]
mod file {
    use std::fs::File;
    use std::io::{BufReader, Read, Write};
    use std::path::Path;

    use csv::{ReaderBuilder, StringRecord, Trim, Writer};
    use log::info;

    use super::{ID_HEADERS, Parsed, WORDS_HEADERS, parse_text};
    use crate::card::Card;
    use crate::error::{IngestError, LineErrorKind};

    fn find_column(headers: &StringRecord, aliases: &[&str]) -> Option<usize> {
        headers.iter().position(|header| {
            let header = header.trim_start_matches('\u{feff}').trim();
            aliases
                .iter()
                .any(|alias| header.eq_ignore_ascii_case(alias))
        })
    }

    /// Parses CSV data with a header row naming an id column and a words
    /// column. Other columns are ignored; the words cell is split on
    /// whitespace. Records whose id or words cell is not valid UTF-8 are
    /// rejected like any other bad record.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read, is not valid CSV, or
    /// lacks one of the required columns.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn parse_csv<R: Read>(reader: R) -> Result<Parsed, IngestError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let id_column = find_column(&headers, &ID_HEADERS).ok_or(IngestError::MissingColumn("id"))?;
        let words_column =
            find_column(&headers, &WORDS_HEADERS).ok_or(IngestError::MissingColumn("words"))?;

        let mut parsed = Parsed::default();
        for (index, record) in reader.byte_records().enumerate() {
            let record = record?;
            let line_no = record
                .position()
                .map_or(index + 2, |position| position.line() as usize);

            let (Ok(id), Ok(words)) = (
                core::str::from_utf8(record.get(id_column).unwrap_or_default()),
                core::str::from_utf8(record.get(words_column).unwrap_or_default()),
            ) else {
                parsed.reject(line_no, LineErrorKind::InvalidUtf8);
                continue;
            };
            if id.is_empty() || words.split_whitespace().next().is_none() {
                parsed.reject(line_no, LineErrorKind::Malformed);
                continue;
            }
            parsed.push(line_no, id, words.split_whitespace());
        }

        Ok(parsed)
    }

    /// Loads cards from a file, choosing CSV for a `.csv` extension and the
    /// line-oriented text format otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or, for CSV files, the
    /// data is malformed.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Parsed, IngestError> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"));

        let mut reader = BufReader::new(File::open(path)?);
        let parsed = if is_csv {
            parse_csv(reader)?
        } else {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            parse_text(&text)
        };

        info!(
            "loaded {} card(s) from {}, {} record(s) rejected",
            parsed.cards.len(),
            path.display(),
            parsed.errors.len()
        );
        Ok(parsed)
    }

    /// Writes cards as CSV with an `id` and a `words` column, the format
    /// [`parse_csv`] reads back. Words are space separated in sorted order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn write_csv<'a, W, I>(writer: W, cards: I) -> Result<(), IngestError>
    where
        W: Write,
        I: IntoIterator<Item = &'a Card>,
    {
        let mut writer = Writer::from_writer(writer);
        writer.write_record([ID_HEADERS[0], WORDS_HEADERS[0]])?;

        for card in cards {
            let words = card.words().iter().map(String::as_str).collect::<Vec<_>>();
            writer.write_record([card.id(), words.join(" ").as_str()])?;
        }

        writer.flush()?;
        Ok(())
    }
}
