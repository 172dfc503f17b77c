//! Neighbourhoods covering every move width up to a maximum.

use std::collections::BTreeSet;

use rand::Rng;
use subsetforge_core::{Result, SubsetSolution};

use crate::heuristic::r#move::SubsetMove;
use crate::heuristic::selector::{binomial, random_subset, CandidateSets};

use super::generate::{
    addition_moves, addition_width, deletion_moves, deletion_width, random_swap, swap_count,
    swap_moves, swap_width, trace_capped,
};
use super::{require_positive, Neighbourhood};

/// Performs between one and `max_swaps` simultaneous swaps.
///
/// A random move first draws the number of swaps uniformly from the feasible
/// range, then the ids on both sides. The full neighbourhood is the union of
/// all swap moves of width `1..=max_swaps`, which becomes very large quickly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSwapNeighbourhood {
    max_swaps: usize,
    fixed_ids: BTreeSet<usize>,
}

impl MultiSwapNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `max_swaps` is zero.
    pub fn new(max_swaps: usize) -> Result<Self> {
        Ok(Self {
            max_swaps: require_positive("the maximum number of swaps", max_swaps)?,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Sets the ids that are never swapped.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn max_swaps(&self) -> usize {
        self.max_swaps
    }

    fn width(&self, candidates: &CandidateSets) -> usize {
        let width = swap_width(self.max_swaps, candidates);
        trace_capped("multi_swap", self.max_swaps, width);
        width
    }
}

impl Neighbourhood for MultiSwapNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        match self.width(&candidates) {
            0 => None,
            m => {
                let k = rng.random_range(1..=m);
                Some(random_swap(&candidates, k, rng))
            }
        }
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let m = self.width(&candidates);
        (1..=m).flat_map(move |k| {
            swap_moves(candidates.remove.clone(), candidates.add.clone(), k)
        })
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let m = swap_width(self.max_swaps, &candidates);
        (1..=m)
            .map(|k| swap_count(&candidates, k))
            .fold(0, u128::saturating_add)
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

/// Adds between one and `max_additions` unselected ids, never growing the
/// selection beyond `max_subset_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiAdditionNeighbourhood {
    max_additions: usize,
    max_subset_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl MultiAdditionNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `max_additions` or `max_subset_size` is
    /// zero.
    pub fn new(max_additions: usize, max_subset_size: usize) -> Result<Self> {
        Ok(Self {
            max_additions: require_positive("the maximum number of additions", max_additions)?,
            max_subset_size: require_positive("the maximum subset size", max_subset_size)?,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Creates the neighbourhood without a bound on the selection size.
    pub fn unbounded(max_additions: usize) -> Result<Self> {
        Self::new(max_additions, usize::MAX)
    }

    /// Sets the ids that are never added.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn max_additions(&self) -> usize {
        self.max_additions
    }

    pub fn max_subset_size(&self) -> usize {
        self.max_subset_size
    }

    fn width<S: SubsetSolution + ?Sized>(&self, solution: &S, candidates: &CandidateSets) -> usize {
        let width = addition_width(
            self.max_additions,
            candidates,
            solution.num_selected_ids(),
            self.max_subset_size,
        );
        trace_capped("multi_addition", self.max_additions, width);
        width
    }
}

impl Neighbourhood for MultiAdditionNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        match self.width(solution, &candidates) {
            0 => None,
            m => {
                let k = rng.random_range(1..=m);
                Some(SubsetMove::new(
                    random_subset(&candidates.add, k, rng),
                    BTreeSet::new(),
                ))
            }
        }
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let m = self.width(solution, &candidates);
        (1..=m).flat_map(move |k| addition_moves(candidates.add.clone(), k))
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let m = addition_width(
            self.max_additions,
            &candidates,
            solution.num_selected_ids(),
            self.max_subset_size,
        );
        (1..=m)
            .map(|k| binomial(candidates.num_add(), k))
            .fold(0, u128::saturating_add)
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

/// Removes between one and `max_deletions` selected ids, never shrinking the
/// selection below `min_subset_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiDeletionNeighbourhood {
    max_deletions: usize,
    min_subset_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl MultiDeletionNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `max_deletions` is zero.
    pub fn new(max_deletions: usize, min_subset_size: usize) -> Result<Self> {
        Ok(Self {
            max_deletions: require_positive("the maximum number of deletions", max_deletions)?,
            min_subset_size,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Sets the ids that are never removed.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn max_deletions(&self) -> usize {
        self.max_deletions
    }

    pub fn min_subset_size(&self) -> usize {
        self.min_subset_size
    }

    fn width<S: SubsetSolution + ?Sized>(&self, solution: &S, candidates: &CandidateSets) -> usize {
        let width = deletion_width(
            self.max_deletions,
            candidates,
            solution.num_selected_ids(),
            self.min_subset_size,
        );
        trace_capped("multi_deletion", self.max_deletions, width);
        width
    }
}

impl Neighbourhood for MultiDeletionNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        match self.width(solution, &candidates) {
            0 => None,
            m => {
                let k = rng.random_range(1..=m);
                Some(SubsetMove::new(
                    BTreeSet::new(),
                    random_subset(&candidates.remove, k, rng),
                ))
            }
        }
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let m = self.width(solution, &candidates);
        (1..=m).flat_map(move |k| deletion_moves(candidates.remove.clone(), k))
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let m = deletion_width(
            self.max_deletions,
            &candidates,
            solution.num_selected_ids(),
            self.min_subset_size,
        );
        (1..=m)
            .map(|k| binomial(candidates.num_remove(), k))
            .fold(0, u128::saturating_add)
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}
