//! Candidate id resolution.
//!
//! Candidate sets are derived from the solution on every call. They are never
//! cached: the search may change the selection between two calls.

use std::collections::BTreeSet;
use std::sync::Arc;

use subsetforge_core::SubsetSolution;

/// Ids eligible for removal and for addition in one generation call.
///
/// Both pools are ascending and shared, so lazy move streams can hold on to
/// them after the solution borrow ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSets {
    /// Selected ids minus fixed ids.
    pub remove: Arc<[usize]>,
    /// Unselected ids minus fixed ids.
    pub add: Arc<[usize]>,
}

impl CandidateSets {
    pub fn resolve<S: SubsetSolution + ?Sized>(solution: &S, fixed_ids: &BTreeSet<usize>) -> Self {
        Self {
            remove: remove_candidates(solution, fixed_ids),
            add: add_candidates(solution, fixed_ids),
        }
    }

    pub fn num_remove(&self) -> usize {
        self.remove.len()
    }

    pub fn num_add(&self) -> usize {
        self.add.len()
    }
}

/// Returns the selected ids that are not fixed.
pub fn remove_candidates<S: SubsetSolution + ?Sized>(
    solution: &S,
    fixed_ids: &BTreeSet<usize>,
) -> Arc<[usize]> {
    without_fixed(solution.selected_ids(), fixed_ids)
}

/// Returns the unselected ids that are not fixed.
pub fn add_candidates<S: SubsetSolution + ?Sized>(
    solution: &S,
    fixed_ids: &BTreeSet<usize>,
) -> Arc<[usize]> {
    without_fixed(solution.unselected_ids(), fixed_ids)
}

fn without_fixed(ids: &BTreeSet<usize>, fixed_ids: &BTreeSet<usize>) -> Arc<[usize]> {
    if fixed_ids.is_empty() {
        ids.iter().copied().collect()
    } else {
        ids.difference(fixed_ids).copied().collect()
    }
}
