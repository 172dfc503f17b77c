//! Neighbourhoods that move a single id at a time.

use std::collections::BTreeSet;

use rand::Rng;
use subsetforge_core::{Result, SubsetForgeError, SubsetSolution};

use crate::heuristic::r#move::SubsetMove;
use crate::heuristic::selector::{random_element, CandidateSets};

use super::generate::{addition_moves, deletion_moves, swap_moves};
use super::{require_positive, Neighbourhood};

/// Swaps one selected id for one unselected id.
///
/// The selection size never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSwapNeighbourhood {
    fixed_ids: BTreeSet<usize>,
}

impl SingleSwapNeighbourhood {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ids that are never swapped.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }
}

impl Neighbourhood for SingleSwapNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let delete = random_element(&candidates.remove, rng)?;
        let add = random_element(&candidates.add, rng)?;
        Some(SubsetMove::swap([add], [delete]))
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        swap_moves(candidates.remove, candidates.add, 1)
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        candidates.num_remove() as u128 * candidates.num_add() as u128
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

/// Adds one unselected id while the selection is below `max_subset_size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleAdditionNeighbourhood {
    max_subset_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl SingleAdditionNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `max_subset_size` is zero.
    pub fn new(max_subset_size: usize) -> Result<Self> {
        Ok(Self {
            max_subset_size: require_positive("the maximum subset size", max_subset_size)?,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Creates the neighbourhood without a bound on the selection size.
    pub fn unbounded() -> Self {
        Self {
            max_subset_size: usize::MAX,
            fixed_ids: BTreeSet::new(),
        }
    }

    /// Sets the ids that are never added.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn max_subset_size(&self) -> usize {
        self.max_subset_size
    }

    fn can_add<S: SubsetSolution + ?Sized>(&self, solution: &S) -> bool {
        solution.num_selected_ids() < self.max_subset_size
    }
}

impl Neighbourhood for SingleAdditionNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.can_add(solution) {
            return None;
        }
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        random_element(&candidates.add, rng).map(SubsetMove::addition)
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        self.can_add(solution)
            .then(|| addition_moves(candidates.add, 1))
            .into_iter()
            .flatten()
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        if !self.can_add(solution) {
            return 0;
        }
        CandidateSets::resolve(solution, &self.fixed_ids).num_add() as u128
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

/// Removes one selected id while the selection is above `min_subset_size`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleDeletionNeighbourhood {
    min_subset_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl SingleDeletionNeighbourhood {
    pub fn new(min_subset_size: usize) -> Self {
        Self {
            min_subset_size,
            fixed_ids: BTreeSet::new(),
        }
    }

    /// Sets the ids that are never removed.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn min_subset_size(&self) -> usize {
        self.min_subset_size
    }

    fn can_delete<S: SubsetSolution + ?Sized>(&self, solution: &S) -> bool {
        solution.num_selected_ids() > self.min_subset_size
    }
}

impl Neighbourhood for SingleDeletionNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        if !self.can_delete(solution) {
            return None;
        }
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        random_element(&candidates.remove, rng).map(SubsetMove::deletion)
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        self.can_delete(solution)
            .then(|| deletion_moves(candidates.remove, 1))
            .into_iter()
            .flatten()
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        if !self.can_delete(solution) {
            return 0;
        }
        CandidateSets::resolve(solution, &self.fixed_ids).num_remove() as u128
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}

/// The three single-id move types a perturbation can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PerturbationType {
    Addition,
    Deletion,
    Swap,
}

/// Adds, removes or swaps a single id, keeping the selection size within
/// `min_subset_size..=max_subset_size`.
///
/// A random move first picks one of the feasible move types uniformly, then
/// a uniformly random move of that type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinglePerturbationNeighbourhood {
    min_subset_size: usize,
    max_subset_size: usize,
    fixed_ids: BTreeSet<usize>,
}

impl SinglePerturbationNeighbourhood {
    /// # Errors
    /// Returns `InvalidArgument` if `max_subset_size` is zero or smaller than
    /// `min_subset_size`.
    pub fn new(min_subset_size: usize, max_subset_size: usize) -> Result<Self> {
        require_positive("the maximum subset size", max_subset_size)?;
        if max_subset_size < min_subset_size {
            return Err(SubsetForgeError::InvalidArgument(format!(
                "the maximum subset size ({max_subset_size}) should be at least \
                 the minimum subset size ({min_subset_size})"
            )));
        }
        Ok(Self {
            min_subset_size,
            max_subset_size,
            fixed_ids: BTreeSet::new(),
        })
    }

    /// Creates the neighbourhood without bounds on the selection size.
    pub fn unbounded() -> Self {
        Self {
            min_subset_size: 0,
            max_subset_size: usize::MAX,
            fixed_ids: BTreeSet::new(),
        }
    }

    /// Sets the ids that are never added or removed.
    pub fn with_fixed_ids(mut self, fixed_ids: impl IntoIterator<Item = usize>) -> Self {
        self.fixed_ids = fixed_ids.into_iter().collect();
        self
    }

    pub fn min_subset_size(&self) -> usize {
        self.min_subset_size
    }

    pub fn max_subset_size(&self) -> usize {
        self.max_subset_size
    }

    fn feasible_types(
        &self,
        num_selected: usize,
        candidates: &CandidateSets,
    ) -> Vec<PerturbationType> {
        let mut types = Vec::with_capacity(3);
        if num_selected < self.max_subset_size && candidates.num_add() > 0 {
            types.push(PerturbationType::Addition);
        }
        if num_selected > self.min_subset_size && candidates.num_remove() > 0 {
            types.push(PerturbationType::Deletion);
        }
        if candidates.num_add() > 0 && candidates.num_remove() > 0 {
            types.push(PerturbationType::Swap);
        }
        types
    }
}

impl Neighbourhood for SinglePerturbationNeighbourhood {
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let types = self.feasible_types(solution.num_selected_ids(), &candidates);
        if types.is_empty() {
            return None;
        }
        match types[rng.random_range(0..types.len())] {
            PerturbationType::Addition => {
                random_element(&candidates.add, rng).map(SubsetMove::addition)
            }
            PerturbationType::Deletion => {
                random_element(&candidates.remove, rng).map(SubsetMove::deletion)
            }
            PerturbationType::Swap => {
                let delete = random_element(&candidates.remove, rng)?;
                let add = random_element(&candidates.add, rng)?;
                Some(SubsetMove::swap([add], [delete]))
            }
        }
    }

    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let types = self.feasible_types(solution.num_selected_ids(), &candidates);
        let has = |t| types.contains(&t);

        let additions = has(PerturbationType::Addition)
            .then(|| addition_moves(candidates.add.clone(), 1));
        let deletions = has(PerturbationType::Deletion)
            .then(|| deletion_moves(candidates.remove.clone(), 1));
        let swaps = has(PerturbationType::Swap)
            .then(|| swap_moves(candidates.remove, candidates.add, 1));

        additions
            .into_iter()
            .flatten()
            .chain(deletions.into_iter().flatten())
            .chain(swaps.into_iter().flatten())
    }

    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized,
    {
        let candidates = CandidateSets::resolve(solution, &self.fixed_ids);
        let num_add = candidates.num_add() as u128;
        let num_remove = candidates.num_remove() as u128;
        self.feasible_types(solution.num_selected_ids(), &candidates)
            .into_iter()
            .map(|t| match t {
                PerturbationType::Addition => num_add,
                PerturbationType::Deletion => num_remove,
                PerturbationType::Swap => num_add * num_remove,
            })
            .sum()
    }

    fn fixed_ids(&self) -> &BTreeSet<usize> {
        &self.fixed_ids
    }
}
