//! Core domain traits

use std::collections::BTreeSet;

/// A selection of ids drawn from a fixed universe.
///
/// Neighbourhoods only read a solution: they ask for the selected and the
/// unselected ids and derive their candidate sets from those. Moves write to
/// it through `select` and `deselect`.
///
/// The universe is the union of both sets and never changes; implementations
/// keep the two sets disjoint.
///
/// # Example
///
/// ```
/// use subsetforge_core::{Subset, SubsetSolution};
///
/// let mut subset = Subset::new(5);
/// assert!(subset.select(3));
/// assert!(!subset.select(3));
/// assert!(!subset.select(7));
///
/// assert_eq!(subset.num_selected_ids(), 1);
/// assert_eq!(subset.num_unselected_ids(), 4);
/// assert_eq!(subset.num_ids(), 5);
/// ```
pub trait SubsetSolution {
    /// Returns the currently selected ids.
    fn selected_ids(&self) -> &BTreeSet<usize>;

    /// Returns the ids of the universe that are not selected.
    fn unselected_ids(&self) -> &BTreeSet<usize>;

    /// Selects `id`.
    ///
    /// Returns `false` without changing anything if the id is already
    /// selected or is not part of the universe.
    fn select(&mut self, id: usize) -> bool;

    /// Deselects `id`.
    ///
    /// Returns `false` without changing anything if the id is not selected.
    fn deselect(&mut self, id: usize) -> bool;

    fn num_selected_ids(&self) -> usize {
        self.selected_ids().len()
    }

    fn num_unselected_ids(&self) -> usize {
        self.unselected_ids().len()
    }

    /// Returns the size of the universe.
    fn num_ids(&self) -> usize {
        self.num_selected_ids() + self.num_unselected_ids()
    }

    fn is_selected(&self, id: usize) -> bool {
        self.selected_ids().contains(&id)
    }
}
