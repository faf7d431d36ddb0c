use serde::{Deserialize, Serialize};

use crate::roll::roll_components;

/// Everything needed to cross-check a word against a roll.
///
/// `sum` is always `index + 1` and `rolls` lists the roll values that add up
/// to it, ascending. The last word (index 2047, sum 2048) is beyond what the
/// eleven roll values can add up to, so its `rolls` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReport {
    pub index: usize,
    pub sum: i64,
    pub word: String,
    pub rolls: Vec<i64>,
}

impl WordReport {
    pub(crate) fn new(index: usize, word: &str) -> Self {
        let sum = index as i64 + 1;
        Self {
            index,
            sum,
            word: word.to_string(),
            rolls: roll_components(sum).unwrap_or_default(),
        }
    }
}
