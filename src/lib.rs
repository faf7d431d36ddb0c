//! Derive and verify BIP39 English words from dice or card rolls.
//!
//! The crate embeds the canonical 2048-word list, validates it on first use
//! and answers index, roll-sum and reverse lookups against it. No mnemonic
//! checksum or seed derivation happens here; the output is a single word that
//! the user writes down by hand.

pub mod app;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod logging;
pub mod roll;
pub mod service;
pub mod types;
pub mod wordlist;

pub use app::App;
pub use config::Config;
pub use error::SeedrollError;
pub use logging::init_logging;
pub use roll::{
    is_valid_roll_sum, is_valid_word_index, roll_components, sum_to_index, RollTally,
    VALID_ROLL_VALUES,
};
pub use service::WordlistService;
pub use types::WordReport;
pub use wordlist::Wordlist;

/// Number of words in every BIP39 list.
pub const WORD_COUNT: usize = 2048;

/// The BIP39 English wordlist, one word per line.
pub const EMBEDDED_ENGLISH: &str = include_str!("../wordlists/english.txt");

/// SHA-256 of the published BIP39 `english.txt`.
pub const CANONICAL_ENGLISH_SHA256: &str =
    "2f5eed53a4727b4bf8880d8f3f199efc90e58503646d9ff8eff3a2ed3b24dbda";
