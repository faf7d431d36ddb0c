//! Lazily-loaded wordlist shared by every lookup.
//!
//! A [`WordlistService`] owns its resource text and parses it on first use.
//! Initialization is serialized by a mutex so exactly one parse happens even
//! under concurrent first calls; after that, reads go through the `OnceLock`
//! without locking. A failed parse publishes nothing and the next call tries
//! again.

use std::borrow::Cow;
use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::{debug, info, warn};

use crate::roll::{is_valid_roll_sum, is_valid_word_index, sum_to_index, RollTally};
use crate::types::WordReport;
use crate::wordlist::Wordlist;
use crate::{SeedrollError, EMBEDDED_ENGLISH};

static SHARED: WordlistService = WordlistService::new();

#[derive(Debug)]
pub struct WordlistService {
    source: Cow<'static, str>,
    words: OnceLock<Wordlist>,
    init_lock: Mutex<()>,
}

impl Default for WordlistService {
    fn default() -> Self {
        Self::new()
    }
}

impl WordlistService {
    /// Service backed by the embedded BIP39 English list.
    pub const fn new() -> Self {
        Self {
            source: Cow::Borrowed(EMBEDDED_ENGLISH),
            words: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Service backed by an arbitrary resource. Validation is deferred to
    /// [`initialize`](Self::initialize) like the embedded one.
    pub fn with_source(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
            words: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Process-wide instance over the embedded list.
    pub fn shared() -> &'static WordlistService {
        &SHARED
    }

    /// Parse and publish the wordlist. Returns immediately once loaded.
    pub fn initialize(&self) -> Result<(), SeedrollError> {
        self.wordlist().map(|_| ())
    }

    pub fn is_initialized(&self) -> bool {
        self.words.get().is_some()
    }

    /// The loaded list, initializing it first if needed.
    pub fn wordlist(&self) -> Result<&Wordlist, SeedrollError> {
        if let Some(list) = self.words.get() {
            return Ok(list);
        }

        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(list) = self.words.get() {
            return Ok(list);
        }

        debug!(bytes = self.source.len(), "parsing wordlist");
        let parsed = Wordlist::parse(&self.source).map_err(|e| {
            warn!(error = %e, "wordlist rejected");
            e
        })?;
        info!(words = parsed.len(), "wordlist loaded");
        Ok(self.words.get_or_init(|| parsed))
    }

    /// Word at a zero-based index.
    pub fn get_word(&self, index: i64) -> Result<&str, SeedrollError> {
        let list = self.wordlist()?;
        usize::try_from(index)
            .ok()
            .and_then(|i| list.word(i))
            .ok_or(SeedrollError::IndexOutOfRange {
                index,
                max: list.len(),
            })
    }

    /// Zero-based index of a word, ignoring case and surrounding whitespace.
    pub fn index_of(&self, word: &str) -> Result<usize, SeedrollError> {
        self.wordlist()?
            .position(word)
            .ok_or_else(|| SeedrollError::UnknownWord(word.trim().to_string()))
    }

    /// Validate a roll sum, convert it to an index and look the word up.
    pub fn roll_sum_to_word(&self, sum: i64) -> Result<&str, SeedrollError> {
        self.get_word(roll_index(sum)?)
    }

    /// Same checks as [`roll_sum_to_word`](Self::roll_sum_to_word), returning
    /// the full report for the selected word.
    pub fn roll_report(&self, sum: i64) -> Result<WordReport, SeedrollError> {
        self.report(roll_index(sum)?)
    }

    /// Look up the word selected by a tally of individual roll values.
    pub fn tally_to_word(&self, tally: &RollTally) -> Result<&str, SeedrollError> {
        if tally.is_empty() {
            return Err(SeedrollError::EmptyTally);
        }
        self.get_word(tally.index())
    }

    /// Report for the word at `index`.
    pub fn report(&self, index: i64) -> Result<WordReport, SeedrollError> {
        let word = self.get_word(index)?;
        Ok(WordReport::new(index as usize, word))
    }

    /// Report for a word given by spelling.
    pub fn verify_word(&self, word: &str) -> Result<WordReport, SeedrollError> {
        let index = self.index_of(word)?;
        let list = self.wordlist()?;
        let canonical = list.word(index).unwrap_or_default();
        Ok(WordReport::new(index, canonical))
    }
}

fn roll_index(sum: i64) -> Result<i64, SeedrollError> {
    if !is_valid_roll_sum(sum) {
        return Err(SeedrollError::InvalidRollSum(sum));
    }
    let index = sum_to_index(sum);
    if !is_valid_word_index(index) {
        return Err(SeedrollError::IndexOutOfRange {
            index,
            max: crate::WORD_COUNT,
        });
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_is_not_published() {
        let service = WordlistService::with_source("abandon\nability\n");
        assert!(service.initialize().is_err());
        assert!(!service.is_initialized());
        assert!(matches!(
            service.get_word(0),
            Err(SeedrollError::WrongWordCount { actual: 2, .. })
        ));
    }

    #[test]
    fn empty_source_is_rejected() {
        let service = WordlistService::with_source(String::new());
        assert!(matches!(
            service.initialize(),
            Err(SeedrollError::EmptyResource)
        ));
    }

    #[test]
    fn composed_lookup_rejects_non_power_sums() {
        let service = WordlistService::new();
        assert!(matches!(
            service.roll_sum_to_word(3),
            Err(SeedrollError::InvalidRollSum(3))
        ));
        assert!(matches!(
            service.roll_sum_to_word(2048),
            Err(SeedrollError::InvalidRollSum(2048))
        ));
        assert_eq!(service.roll_sum_to_word(1).unwrap(), "abandon");
    }

    #[test]
    fn roll_report_uses_validated_sum() {
        let service = WordlistService::new();
        let report = service.roll_report(4).unwrap();
        assert_eq!(report.index, 3);
        assert_eq!(report.sum, 4);
        assert_eq!(report.rolls, vec![4]);
        assert_eq!(report.word, service.roll_sum_to_word(4).unwrap());
        assert!(matches!(
            service.roll_report(2048),
            Err(SeedrollError::InvalidRollSum(2048))
        ));
    }
}
