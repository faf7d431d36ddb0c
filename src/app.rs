//! Operations exposed to a desktop shell.
//!
//! Errors cross this boundary as plain strings, so every fallible call
//! renders the library error with `to_string()`.

use crate::roll::{is_valid_roll_sum, is_valid_word_index, sum_to_index};
use crate::WordlistService;

#[derive(Debug, Clone, Copy)]
pub struct App<'a> {
    service: &'a WordlistService,
}

impl Default for App<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl App<'static> {
    /// App bound to the process-wide shared wordlist.
    pub fn new() -> Self {
        Self {
            service: WordlistService::shared(),
        }
    }
}

impl<'a> App<'a> {
    pub fn with_service(service: &'a WordlistService) -> Self {
        Self { service }
    }

    pub fn greet(&self, name: &str) -> String {
        format!("Hello {name}, It's show time!")
    }

    pub fn init_bip39(&self) -> Result<(), String> {
        self.service.initialize().map_err(|e| e.to_string())
    }

    pub fn get_word(&self, index: i64) -> Result<String, String> {
        self.service
            .get_word(index)
            .map(str::to_string)
            .map_err(|e| e.to_string())
    }

    pub fn is_valid_number(&self, num: i64) -> bool {
        is_valid_roll_sum(num)
    }

    pub fn calculate_word_index(&self, sum: i64) -> i64 {
        sum_to_index(sum)
    }

    pub fn validate_word_index(&self, index: i64) -> bool {
        is_valid_word_index(index)
    }
}
