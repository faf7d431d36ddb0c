use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedrollError {
    /// The wordlist resource contained no text at all.
    #[error("embedded wordlist is empty")]
    EmptyResource,

    /// Parsing produced a different number of words than a BIP39 list holds.
    #[error("invalid wordlist length: expected {expected}, got {actual}")]
    WrongWordCount { expected: usize, actual: usize },

    /// The same word appears twice in the resource.
    #[error("duplicate word '{word}' at lines {first} and {second}")]
    DuplicateWord {
        word: String,
        first: usize,
        second: usize,
    },

    /// Requested index falls outside `0..max`.
    #[error("invalid index: {index} (expected 0..{max})")]
    IndexOutOfRange { index: i64, max: usize },

    /// A roll value or roll sum that is not one of the eleven powers of two.
    #[error("invalid roll value: {0}")]
    InvalidRollSum(i64),

    /// The same roll value was reported twice in one tally.
    #[error("roll value {0} already counted")]
    DuplicateRoll(i64),

    /// A tally was converted before any roll value was added.
    #[error("no roll values recorded")]
    EmptyTally,

    /// Reverse lookup for a word that is not in the list.
    #[error("word '{0}' is not in the wordlist")]
    UnknownWord(String),

    /// Failure while writing the CSV lookup table.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
