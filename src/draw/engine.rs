//! Constrained random draws.
//!
//! A request is validated once, then each set is filled by picking uniformly
//! from the remaining pool until it reaches the target size or the pool runs
//! dry. Nothing here panics or returns `Err`: problems are reported as
//! diagnostics on the outcome so the UI can keep going.

use super::constraints::{Constraints, DrawError};
use super::number_set::{NumberSet, MAX_NUMBER, MIN_NUMBER};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Default numbers per set
pub const DEFAULT_SET_SIZE: usize = 6;

/// Whether the sets of one request draw from a common pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSharing {
    /// Every set restarts from the full pool; sets may overlap
    #[default]
    Independent,
    /// Numbers used by one set are gone for the following sets
    Shared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawRequest {
    pub set_size: usize,
    pub number_of_sets: usize,
    pub constraints: Constraints,
    pub pool_sharing: PoolSharing,
}

impl DrawRequest {
    pub fn new(set_size: usize, number_of_sets: usize, constraints: Constraints) -> Self {
        Self {
            set_size,
            number_of_sets,
            constraints,
            pool_sharing: PoolSharing::default(),
        }
    }

    pub fn with_pool_sharing(mut self, pool_sharing: PoolSharing) -> Self {
        self.pool_sharing = pool_sharing;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Something noteworthy that happened while drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawDiagnostic {
    /// The request was rejected; no sets were produced
    Validation(DrawError),
    /// More included numbers than fit in a set; only the lowest `kept` were used
    Truncated { given: usize, kept: usize },
    /// The pool ran out before set `set_index` reached `target`
    Shortfall {
        set_index: usize,
        target: usize,
        actual: usize,
    },
}

impl DrawDiagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Validation(_) => Severity::Error,
            Self::Truncated { .. } | Self::Shortfall { .. } => Severity::Warning,
        }
    }
}

impl fmt::Display for DrawDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{}", err),
            Self::Truncated { given, kept } => write!(
                f,
                "{} included numbers given, only the lowest {} were used",
                given, kept
            ),
            Self::Shortfall {
                set_index,
                target,
                actual,
            } => write!(
                f,
                "set {} has only {} of {} numbers, not enough candidates left",
                set_index + 1,
                actual,
                target
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    pub sets: Vec<NumberSet>,
    pub diagnostics: Vec<DrawDiagnostic>,
}

impl DrawOutcome {
    fn rejected(err: DrawError) -> Self {
        tracing::error!("Draw rejected: {}", err);
        Self {
            sets: Vec::new(),
            diagnostics: vec![DrawDiagnostic::Validation(err)],
        }
    }

    /// The validation error, if the request was rejected
    pub fn validation_error(&self) -> Option<&DrawError> {
        self.diagnostics.iter().find_map(|d| match d {
            DrawDiagnostic::Validation(err) => Some(err),
            _ => None,
        })
    }

    pub fn is_rejected(&self) -> bool {
        self.validation_error().is_some()
    }
}

/// Draw `request.number_of_sets` sets using `rng` as the random source.
pub fn draw_sets<R: Rng + ?Sized>(request: &DrawRequest, rng: &mut R) -> DrawOutcome {
    if !(1..=MAX_NUMBER as usize).contains(&request.set_size) {
        return DrawOutcome::rejected(DrawError::InvalidSetSize(request.set_size));
    }

    let (included, excluded) = match request.constraints.validate() {
        Ok(sets) => sets,
        Err(err) => return DrawOutcome::rejected(err),
    };

    let mut outcome = DrawOutcome::default();
    if request.number_of_sets == 0 {
        return outcome;
    }

    let available: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER)
        .filter(|n| !excluded.contains(n))
        .collect();

    // BTreeSet iteration is ascending, so truncation keeps the lowest values
    let mut valid_included: Vec<u8> = included
        .iter()
        .copied()
        .filter(|n| available.contains(n))
        .collect();
    if valid_included.len() > request.set_size {
        tracing::warn!(
            "Too many included numbers ({}), keeping the lowest {}",
            valid_included.len(),
            request.set_size
        );
        outcome.diagnostics.push(DrawDiagnostic::Truncated {
            given: valid_included.len(),
            kept: request.set_size,
        });
        valid_included.truncate(request.set_size);
    }

    let candidates: Vec<u8> = available
        .iter()
        .copied()
        .filter(|n| !valid_included.contains(n))
        .collect();

    match request.pool_sharing {
        PoolSharing::Independent => {
            for set_index in 0..request.number_of_sets {
                let mut pool = candidates.clone();
                let set = draw_one(
                    set_index,
                    &valid_included,
                    &mut pool,
                    request.set_size,
                    rng,
                    &mut outcome.diagnostics,
                );
                outcome.sets.push(set);
            }
        }
        PoolSharing::Shared => {
            let mut pool = candidates;
            for set_index in 0..request.number_of_sets {
                let seed: &[u8] = if set_index == 0 { &valid_included } else { &[] };
                let set = draw_one(
                    set_index,
                    seed,
                    &mut pool,
                    request.set_size,
                    rng,
                    &mut outcome.diagnostics,
                );
                outcome.sets.push(set);
            }
        }
    }

    outcome
}

fn draw_one<R: Rng + ?Sized>(
    set_index: usize,
    seed: &[u8],
    pool: &mut Vec<u8>,
    target: usize,
    rng: &mut R,
    diagnostics: &mut Vec<DrawDiagnostic>,
) -> NumberSet {
    let mut picked: BTreeSet<u8> = seed.iter().copied().collect();

    while picked.len() < target && !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        picked.insert(pool.swap_remove(idx));
    }

    if picked.len() < target {
        tracing::warn!(
            "Could not fill set {} ({} of {} numbers)",
            set_index + 1,
            picked.len(),
            target
        );
        diagnostics.push(DrawDiagnostic::Shortfall {
            set_index,
            target,
            actual: picked.len(),
        });
    }

    NumberSet::from_set(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn request(included: Vec<u32>, excluded: Vec<u32>) -> DrawRequest {
        DrawRequest::new(DEFAULT_SET_SIZE, 1, Constraints::new(included, excluded))
    }

    fn assert_sorted_unique(set: &NumberSet) {
        assert!(set.numbers().windows(2).all(|w| w[0] < w[1]), "{:?}", set);
        assert!(set
            .numbers()
            .iter()
            .all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n)));
    }

    #[test]
    fn test_unconstrained_draw() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = draw_sets(&request(vec![], vec![]), &mut rng);
        assert_eq!(outcome.sets.len(), 1);
        assert_eq!(outcome.sets[0].len(), 6);
        assert!(outcome.diagnostics.is_empty());
        assert_sorted_unique(&outcome.sets[0]);
    }

    #[test]
    fn test_random_constraints_hold() {
        let mut rng = StdRng::seed_from_u64(7);
        let all: Vec<u32> = (1..=45).collect();

        for _ in 0..500 {
            let mut shuffled = all.clone();
            shuffled.shuffle(&mut rng);
            let n_included = rng.gen_range(0..=6);
            let n_excluded = rng.gen_range(0..=20);
            let included = shuffled[..n_included].to_vec();
            let excluded = shuffled[n_included..n_included + n_excluded].to_vec();

            let outcome = draw_sets(&request(included.clone(), excluded.clone()), &mut rng);
            assert!(outcome.diagnostics.is_empty());
            let set = &outcome.sets[0];
            assert_eq!(set.len(), 6);
            assert_sorted_unique(set);
            for n in &included {
                assert!(set.contains(*n as u8), "{} missing from {}", n, set);
            }
            for n in &excluded {
                assert!(!set.contains(*n as u8), "{} present in {}", n, set);
            }
        }
    }

    #[test]
    fn test_exact_pool_is_fully_used() {
        let mut rng = StdRng::seed_from_u64(3);
        let excluded: Vec<u32> = (7..=45).collect();
        let outcome = draw_sets(&request(vec![], excluded), &mut rng);
        assert_eq!(outcome.sets[0].numbers(), &[1, 2, 3, 4, 5, 6]);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_shortfall_returns_partial_set() {
        let mut rng = StdRng::seed_from_u64(3);
        let excluded: Vec<u32> = (1..=40).collect();
        let outcome = draw_sets(&request(vec![], excluded), &mut rng);
        assert_eq!(outcome.sets[0].numbers(), &[41, 42, 43, 44, 45]);
        assert_eq!(
            outcome.diagnostics,
            vec![DrawDiagnostic::Shortfall {
                set_index: 0,
                target: 6,
                actual: 5
            }]
        );
        assert!(!outcome.is_rejected());
    }

    #[test]
    fn test_too_many_included_keeps_lowest() {
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = draw_sets(&request(vec![7, 6, 5, 4, 3, 2, 1], vec![]), &mut rng);
        assert_eq!(outcome.sets[0].numbers(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(
            outcome.diagnostics,
            vec![DrawDiagnostic::Truncated { given: 7, kept: 6 }]
        );
    }

    #[test]
    fn test_conflict_rejects_draw() {
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = draw_sets(&request(vec![1, 2], vec![2, 3]), &mut rng);
        assert!(outcome.sets.is_empty());
        assert_eq!(
            outcome.validation_error(),
            Some(&DrawError::Conflict { numbers: vec![2] })
        );
    }

    #[test]
    fn test_out_of_range_rejects_draw() {
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = draw_sets(&request(vec![50], vec![]), &mut rng);
        assert!(outcome.sets.is_empty());
        assert!(outcome.is_rejected());
        assert_eq!(outcome.diagnostics[0].severity(), Severity::Error);
    }

    #[test]
    fn test_invalid_set_size_rejects_draw() {
        let mut rng = StdRng::seed_from_u64(3);
        let zero = DrawRequest::new(0, 1, Constraints::default());
        assert_eq!(
            draw_sets(&zero, &mut rng).validation_error(),
            Some(&DrawError::InvalidSetSize(0))
        );
        let huge = DrawRequest::new(46, 1, Constraints::default());
        assert!(draw_sets(&huge, &mut rng).is_rejected());
    }

    #[test]
    fn test_configurable_set_size() {
        let mut rng = StdRng::seed_from_u64(11);
        let req = DrawRequest::new(5, 3, Constraints::new(vec![10], vec![]));
        let outcome = draw_sets(&req, &mut rng);
        assert_eq!(outcome.sets.len(), 3);
        for set in &outcome.sets {
            assert_eq!(set.len(), 5);
            assert!(set.contains(10));
        }
    }

    #[test]
    fn test_number_of_sets() {
        let mut rng = StdRng::seed_from_u64(5);
        let req = DrawRequest::new(6, 4, Constraints::new(vec![1, 2], vec![3, 4]));
        let outcome = draw_sets(&req, &mut rng);
        assert_eq!(outcome.sets.len(), 4);
        for set in &outcome.sets {
            assert_eq!(set.len(), 6);
            assert!(set.contains(1) && set.contains(2));
            assert!(!set.contains(3) && !set.contains(4));
            assert_sorted_unique(set);
        }
    }

    #[test]
    fn test_zero_sets_is_empty_and_quiet() {
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = draw_sets(&DrawRequest::new(6, 0, Constraints::default()), &mut rng);
        assert_eq!(outcome, DrawOutcome::default());
    }

    #[test]
    fn test_independent_sets_each_shortfall() {
        let mut rng = StdRng::seed_from_u64(5);
        let excluded: Vec<u32> = (1..=42).collect();
        let req = DrawRequest::new(6, 2, Constraints::new(vec![], excluded));
        let outcome = draw_sets(&req, &mut rng);
        assert_eq!(outcome.sets.len(), 2);
        assert!(outcome.sets.iter().all(|s| s.numbers() == [43, 44, 45]));
        assert_eq!(outcome.diagnostics.len(), 2);
    }

    #[test]
    fn test_shared_pool_sets_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(9);
        let req = DrawRequest::new(6, 8, Constraints::default())
            .with_pool_sharing(PoolSharing::Shared);
        let outcome = draw_sets(&req, &mut rng);

        assert_eq!(outcome.sets.len(), 8);
        let mut seen = BTreeSet::new();
        for set in &outcome.sets {
            for n in set.numbers() {
                assert!(seen.insert(*n), "{} drawn twice", n);
            }
        }
        assert_eq!(outcome.sets[7].len(), 3);
        assert_eq!(
            outcome.diagnostics,
            vec![DrawDiagnostic::Shortfall {
                set_index: 7,
                target: 6,
                actual: 3
            }]
        );
    }

    #[test]
    fn test_shared_pool_included_only_in_first_set() {
        let mut rng = StdRng::seed_from_u64(9);
        let req = DrawRequest::new(6, 3, Constraints::new(vec![1, 2], vec![]))
            .with_pool_sharing(PoolSharing::Shared);
        let outcome = draw_sets(&req, &mut rng);
        assert!(outcome.sets[0].contains(1) && outcome.sets[0].contains(2));
        for set in &outcome.sets[1..] {
            assert!(!set.contains(1) && !set.contains(2));
            assert_eq!(set.len(), 6);
        }
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let req = DrawRequest::new(6, 5, Constraints::new(vec![9], vec![10]));
        let a = draw_sets(&req, &mut StdRng::seed_from_u64(42));
        let b = draw_sets(&req, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draws_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let req = DrawRequest::new(1, 4500, Constraints::default());
        let outcome = draw_sets(&req, &mut rng);

        let mut counts = [0usize; 46];
        for set in &outcome.sets {
            counts[set.numbers()[0] as usize] += 1;
        }
        for n in 1..=45 {
            assert!((50..160).contains(&counts[n]), "{} drawn {} times", n, counts[n]);
        }
    }

    #[test]
    fn test_diagnostic_messages() {
        let shortfall = DrawDiagnostic::Shortfall {
            set_index: 0,
            target: 6,
            actual: 5,
        };
        assert_eq!(
            shortfall.to_string(),
            "set 1 has only 5 of 6 numbers, not enough candidates left"
        );
        assert_eq!(shortfall.severity(), Severity::Warning);
    }
}
