//! Parsing and querying of newline-delimited BIP39 wordlists.
//!
//! A resource is split on `\n`, each line has a trailing `\r` and any
//! surrounding whitespace removed, and blank lines are skipped. The surviving
//! lines must number exactly [`WORD_COUNT`] and must not repeat. Order is
//! preserved, since a word's position is its BIP39 index.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{SeedrollError, WORD_COUNT};

/// An immutable, validated list of exactly [`WORD_COUNT`] words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

#[derive(Serialize)]
struct TableRow<'a> {
    index: usize,
    sum: usize,
    word: &'a str,
}

impl Wordlist {
    /// Parse and validate a raw wordlist resource.
    pub fn parse(raw: &str) -> Result<Self, SeedrollError> {
        if raw.is_empty() {
            return Err(SeedrollError::EmptyResource);
        }

        let mut words = Vec::with_capacity(WORD_COUNT);
        let mut lines = Vec::with_capacity(WORD_COUNT);
        for (line_no, segment) in raw.split('\n').enumerate() {
            let word = segment.strip_suffix('\r').unwrap_or(segment).trim();
            if word.is_empty() {
                continue;
            }
            words.push(word.to_string());
            lines.push(line_no + 1);
        }

        if words.len() != WORD_COUNT {
            return Err(SeedrollError::WrongWordCount {
                expected: WORD_COUNT,
                actual: words.len(),
            });
        }

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(WORD_COUNT);
        for (word, &line) in words.iter().zip(&lines) {
            if let Some(&first) = seen.get(word.as_str()) {
                return Err(SeedrollError::DuplicateWord {
                    word: word.clone(),
                    first,
                    second: line,
                });
            }
            seen.insert(word.as_str(), line);
        }

        Ok(Self { words })
    }

    /// Number of words. Always [`WORD_COUNT`] for a parsed list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a zero-based index.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Zero-based index of `word`, ignoring case and surrounding whitespace.
    pub fn position(&self, word: &str) -> Option<usize> {
        let needle = word.trim().to_lowercase();
        self.words.iter().position(|w| w.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Hex SHA-256 of the list in its canonical file form: every word
    /// followed by a single `\n`.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.words {
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }

    /// Write the full lookup table as CSV with an `index,sum,word` header.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), SeedrollError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (index, word) in self.iter().enumerate() {
            wtr.serialize(TableRow {
                index,
                sum: index + 1,
                word,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }
}
