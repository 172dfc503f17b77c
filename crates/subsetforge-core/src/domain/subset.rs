//! Owned subset selection.

use std::collections::BTreeSet;

use crate::error::{Result, SubsetForgeError};

use super::SubsetSolution;

/// A selection over a fixed universe of ids, stored as two ordered sets.
///
/// Both sets are kept explicitly so that neighbourhoods can read the
/// unselected ids without recomputing the complement on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Subset {
    selected: BTreeSet<usize>,
    unselected: BTreeSet<usize>,
}

impl Subset {
    /// Creates an empty selection over the universe `0..num_ids`.
    pub fn new(num_ids: usize) -> Self {
        Self::from_ids(0..num_ids)
    }

    /// Creates an empty selection over an arbitrary universe.
    pub fn from_ids(ids: impl IntoIterator<Item = usize>) -> Self {
        Self {
            selected: BTreeSet::new(),
            unselected: ids.into_iter().collect(),
        }
    }

    /// Creates a selection over the universe `0..num_ids` with the given ids
    /// selected.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a selected id lies outside the universe.
    pub fn with_selection(
        num_ids: usize,
        selected: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let mut subset = Self::new(num_ids);
        for id in selected {
            if id >= num_ids {
                return Err(SubsetForgeError::invalid_argument(format!(
                    "selected id {id} is outside the universe 0..{num_ids}"
                )));
            }
            subset.select(id);
        }
        Ok(subset)
    }

    /// Returns every id of the universe, in ascending order.
    pub fn all_ids(&self) -> BTreeSet<usize> {
        self.selected.union(&self.unselected).copied().collect()
    }

    pub fn select_all(&mut self) {
        self.selected.append(&mut self.unselected);
    }

    pub fn deselect_all(&mut self) {
        self.unselected.append(&mut self.selected);
    }
}

impl SubsetSolution for Subset {
    fn selected_ids(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    fn unselected_ids(&self) -> &BTreeSet<usize> {
        &self.unselected
    }

    fn select(&mut self, id: usize) -> bool {
        if self.unselected.remove(&id) {
            self.selected.insert(id);
            true
        } else {
            false
        }
    }

    fn deselect(&mut self, id: usize) -> bool {
        if self.selected.remove(&id) {
            self.unselected.insert(id);
            true
        } else {
            false
        }
    }
}
