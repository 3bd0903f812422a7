//! Included/excluded number constraints and their validation.
//!
//! Free text from the form is parsed leniently (bad tokens are dropped), but
//! constraints built programmatically can still carry out-of-range values, so
//! the engine re-validates everything before drawing.

use super::number_set::{MAX_NUMBER, MIN_NUMBER};
use std::collections::BTreeSet;
use std::fmt;

/// Which constraint list a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintList {
    Included,
    Excluded,
}

impl fmt::Display for ConstraintList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Included => f.write_str("included"),
            Self::Excluded => f.write_str("excluded"),
        }
    }
}

/// Reasons a draw request is rejected outright
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("set size {0} is outside 1-{max}", max = MAX_NUMBER)]
    InvalidSetSize(usize),

    #[error("{list} number {value} is outside {min}-{max}", min = MIN_NUMBER, max = MAX_NUMBER)]
    OutOfRange { list: ConstraintList, value: u32 },

    #[error("numbers {} are both included and excluded", format_numbers(.numbers))]
    Conflict { numbers: Vec<u8> },
}

fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a comma-separated list of numbers as typed into the form.
///
/// Tokens that are not integers or fall outside the drawable range are
/// dropped. Order is preserved and duplicates are kept; the engine collapses
/// them later.
pub fn parse_numbers(input: &str) -> Vec<u32> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<u32>() {
            Ok(n) if (MIN_NUMBER as u32..=MAX_NUMBER as u32).contains(&n) => Some(n),
            Ok(n) => {
                tracing::debug!("Dropping out-of-range number {} from input", n);
                None
            }
            Err(_) => {
                tracing::debug!("Dropping non-numeric token {:?} from input", token);
                None
            }
        })
        .collect()
}

/// Numbers that must (included) or must not (excluded) appear in a draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub included: Vec<u32>,
    pub excluded: Vec<u32>,
}

impl Constraints {
    pub fn new(included: Vec<u32>, excluded: Vec<u32>) -> Self {
        Self { included, excluded }
    }

    /// Build constraints from the raw text of the two form fields
    pub fn parse(included: &str, excluded: &str) -> Self {
        Self::new(parse_numbers(included), parse_numbers(excluded))
    }

    /// Check ranges, then disjointness, and return both lists as sorted sets.
    pub(crate) fn validate(&self) -> Result<(BTreeSet<u8>, BTreeSet<u8>), DrawError> {
        let included = to_checked_set(&self.included, ConstraintList::Included)?;
        let excluded = to_checked_set(&self.excluded, ConstraintList::Excluded)?;

        let overlap: Vec<u8> = included.intersection(&excluded).copied().collect();
        if !overlap.is_empty() {
            return Err(DrawError::Conflict { numbers: overlap });
        }

        Ok((included, excluded))
    }
}

fn to_checked_set(values: &[u32], list: ConstraintList) -> Result<BTreeSet<u8>, DrawError> {
    values
        .iter()
        .map(|&value| {
            if (MIN_NUMBER as u32..=MAX_NUMBER as u32).contains(&value) {
                Ok(value as u8)
            } else {
                Err(DrawError::OutOfRange { list, value })
            }
        })
        .collect()
}
