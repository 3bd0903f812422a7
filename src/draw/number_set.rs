//! A single drawn set of lottery numbers.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Lowest number that can be drawn
pub const MIN_NUMBER: u8 = 1;

/// Highest number that can be drawn
pub const MAX_NUMBER: u8 = 45;

/// Ascending, duplicate-free sequence of numbers in `MIN_NUMBER..=MAX_NUMBER`.
///
/// Only the draw engine builds these, so every value handed to the frontend
/// already satisfies the ordering and uniqueness guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumberSet(Vec<u8>);

impl NumberSet {
    pub(crate) fn from_set(numbers: BTreeSet<u8>) -> Self {
        Self(numbers.into_iter().collect())
    }

    pub fn numbers(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_set_sorts_and_dedupes() {
        let set = NumberSet::from_set([12, 3, 45, 3].into_iter().collect());
        assert_eq!(set.numbers(), &[3, 12, 45]);
        assert!(set.contains(12));
        assert!(!set.contains(13));
    }

    #[test]
    fn test_display_joins_with_commas() {
        let set = NumberSet::from_set([7, 1, 30].into_iter().collect());
        assert_eq!(set.to_string(), "1, 7, 30");
        assert_eq!(NumberSet::from_set(BTreeSet::new()).to_string(), "");
    }
}
