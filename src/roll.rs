//! Roll value validation and sum-to-index arithmetic.
//!
//! A user derives one word by marking which of eleven dice or card outcomes
//! came up, each worth a distinct power of two from 1 to 1024. The values are
//! added into a roll sum and the word index is `sum - 1`.
//!
//! The three checks here are independent: a valid roll value does not imply
//! the converted index is in range. [`crate::WordlistService::roll_sum_to_word`]
//! and [`crate::WordlistService::tally_to_word`] compose them.

use std::collections::BTreeSet;

use crate::{SeedrollError, WORD_COUNT};

/// The eleven legal roll values, ascending.
pub const VALID_ROLL_VALUES: [i64; 11] = [1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1024];

/// Returns `true` iff `n` is one of [`VALID_ROLL_VALUES`].
pub fn is_valid_roll_sum(n: i64) -> bool {
    VALID_ROLL_VALUES.contains(&n)
}

/// Convert a roll sum into a word index. No validation is performed.
///
/// Saturates at `i64::MIN` rather than overflowing.
pub fn sum_to_index(sum: i64) -> i64 {
    sum.saturating_sub(1)
}

/// Returns `true` iff `index` addresses a word in a BIP39 list.
pub fn is_valid_word_index(index: i64) -> bool {
    (0..WORD_COUNT as i64).contains(&index)
}

/// Split a roll sum into the distinct roll values that produce it.
///
/// Returns `None` unless `1 <= sum <= 2047`, the range reachable by adding
/// each roll value at most once.
pub fn roll_components(sum: i64) -> Option<Vec<i64>> {
    if !(1..WORD_COUNT as i64).contains(&sum) {
        return None;
    }
    Some(
        VALID_ROLL_VALUES
            .iter()
            .copied()
            .filter(|v| sum & v != 0)
            .collect(),
    )
}

/// Accumulates individual roll values for a single word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollTally {
    values: BTreeSet<i64>,
}

impl RollTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from a sequence of roll values, stopping at the first
    /// invalid or repeated one.
    pub fn from_values<I>(values: I) -> Result<Self, SeedrollError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut tally = Self::new();
        for value in values {
            tally.add(value)?;
        }
        Ok(tally)
    }

    /// Record one roll value.
    pub fn add(&mut self, value: i64) -> Result<(), SeedrollError> {
        if !is_valid_roll_sum(value) {
            return Err(SeedrollError::InvalidRollSum(value));
        }
        if !self.values.insert(value) {
            return Err(SeedrollError::DuplicateRoll(value));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Recorded values, ascending.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    pub fn sum(&self) -> i64 {
        self.values.iter().sum()
    }

    pub fn index(&self) -> i64 {
        sum_to_index(self.sum())
    }
}
