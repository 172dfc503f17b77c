//! Neighbourhoods with a fixed move width.
//!
//! Each of these enumerates all combinations of exactly one width, as
//! opposed to the multi neighbourhoods that cover every width up to a
//! maximum.

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

/// Swaps exactly `num_swaps` selected ids for as many unselected ids.
///
/// The selection size never changes, which suits fixed size problems. When
/// fewer than `num_swaps` candidates are available on either side, as many
/// swaps as possible are performed instead.
///
/// With `s` selected ids out of `n` and two swaps, the full neighbourhood
/// holds `s(s-1)/2 * (n-s)(n-s-1)/2` moves. With one swap it coincides with
/// `SingleSwapNeighbourhood`, which is cheaper.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use subsetforge_core::Subset;
/// use subsetforge_solver::heuristic::neighbourhood::{
///     DisjointMultiSwapNeighbourhood, Neighbourhood,
/// };
///
/// let solution = Subset::with_selection(10, [0, 1, 2, 3]).unwrap();
/// let neighbourhood = DisjointMultiSwapNeighbourhood::new(2)
///     .unwrap()
///     .with_fixed_ids([0]);
///
/// assert_eq!(neighbourhood.move_count(&solution), 45);
///
/// let mut rng = StdRng::seed_from_u64(5);
/// let m = neighbourhood.random_move(&solution, &mut rng).unwrap();
/// assert_eq!(m.num_added(), 2);
/// assert_eq!(m.num_deleted(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointMultiSwapNeighbourhood {
    num_swaps: usize,
    fixed_ids: BTreeSet<usize>,
}

impl DisjointMultiSwapNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `num_swaps` is zero.
    pub fn new(num_swaps: usize) -> Result<Self> {
        Ok(Self {
            num_swaps: require_positive("the number of swaps", num_swaps)?,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Sets the ids that are never swapped.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn num_swaps(&self) -> usize {
        self.num_swaps
    }

    fn width(&self, candidates: &CandidateSets) -> usize {
        let width = swap_width(self.num_swaps, candidates);
        trace_capped("disjoint_multi_swap", self.num_swaps, width);
        width
    }
}

impl Neighbourhood for DisjointMultiSwapNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        match self.width(&candidates) {
            0 => None,
            k => Some(random_swap(&candidates, k, rng)),
        }
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let k = self.width(&candidates);
        // k = 0 would otherwise yield one empty move
        (k > 0)
            .then(|| swap_moves(candidates.remove, candidates.add, k))
            .into_iter()
            .flatten()
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        match swap_width(self.num_swaps, &candidates) {
            0 => 0,
            k => swap_count(&candidates, k),
        }
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

/// Adds exactly `num_additions` unselected ids, never growing the selection
/// beyond `max_subset_size`.
///
/// When fewer additions are possible, as many as possible are performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointMultiAdditionNeighbourhood {
    num_additions: usize,
    max_subset_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl DisjointMultiAdditionNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `num_additions` or `max_subset_size` is
    /// zero.
    pub fn new(num_additions: usize, max_subset_size: usize) -> Result<Self> {
        Ok(Self {
            num_additions: require_positive("the number of additions", num_additions)?,
            max_subset_size: require_positive("the maximum subset size", max_subset_size)?,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Creates the neighbourhood without a bound on the selection size.
    pub fn unbounded(num_additions: usize) -> Result<Self> {
        Self::new(num_additions, usize::MAX)
    }

    /// Sets the ids that are never added.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn num_additions(&self) -> usize {
        self.num_additions
    }

    pub fn max_subset_size(&self) -> usize {
        self.max_subset_size
    }

    fn width<S: SubsetSolution + ?Sized>(&self, solution: &S, candidates: &CandidateSets) -> usize {
        let width = addition_width(
            self.num_additions,
            candidates,
            solution.num_selected_ids(),
            self.max_subset_size,
        );
        trace_capped("disjoint_multi_addition", self.num_additions, width);
        width
    }
}

impl Neighbourhood for DisjointMultiAdditionNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        match self.width(solution, &candidates) {
            0 => None,
            k => Some(SubsetMove::new(
                random_subset(&candidates.add, k, rng),
                BTreeSet::new(),
            )),
        }
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let k = self.width(solution, &candidates);
        (k > 0)
            .then(|| addition_moves(candidates.add, k))
            .into_iter()
            .flatten()
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let k = addition_width(
            self.num_additions,
            &candidates,
            solution.num_selected_ids(),
            self.max_subset_size,
        );
        match k {
            0 => 0,
            k => binomial(candidates.num_add(), k),
        }
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

/// Removes exactly `num_deletions` selected ids, never shrinking the
/// selection below `min_subset_size`.
///
/// When fewer deletions are possible, as many as possible are performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointMultiDeletionNeighbourhood {
    num_deletions: usize,
    min_subset_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl DisjointMultiDeletionNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `num_deletions` is zero.
    pub fn new(num_deletions: usize, min_subset_size: usize) -> Result<Self> {
        Ok(Self {
            num_deletions: require_positive("the number of deletions", num_deletions)?,
            min_subset_size,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Sets the ids that are never removed.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn num_deletions(&self) -> usize {
        self.num_deletions
    }

    pub fn min_subset_size(&self) -> usize {
        self.min_subset_size
    }

    fn width<S: SubsetSolution + ?Sized>(&self, solution: &S, candidates: &CandidateSets) -> usize {
        let width = deletion_width(
            self.num_deletions,
            candidates,
            solution.num_selected_ids(),
            self.min_subset_size,
        );
        trace_capped("disjoint_multi_deletion", self.num_deletions, width);
        width
    }
}

impl Neighbourhood for DisjointMultiDeletionNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        match self.width(solution, &candidates) {
            0 => None,
            k => Some(SubsetMove::new(
                BTreeSet::new(),
                random_subset(&candidates.remove, k, rng),
            )),
        }
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let k = self.width(solution, &candidates);
        (k > 0)
            .then(|| deletion_moves(candidates.remove, k))
            .into_iter()
            .flatten()
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let k = deletion_width(
            self.num_deletions,
            &candidates,
            solution.num_selected_ids(),
            self.min_subset_size,
        );
        match k {
            0 => 0,
            k => binomial(candidates.num_remove(), k),
        }
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}
