//! SubsetMove - adds and removes sets of ids.

use std::collections::BTreeSet;
use std::fmt;

use subsetforge_core::{Result, SubsetForgeError, SubsetSolution};

/// A move that removes `delete` from the selection and adds `add` to it.
///
/// Both sets are disjoint by construction. A move is not checked against any
/// solution when it is created; `apply_to` does that.
///
/// # Example
/// ```
/// use subsetforge_core::{Subset, SubsetSolution};
/// use subsetforge_solver::heuristic::r#move::SubsetMove;
///
/// let mut subset = Subset::with_selection(4, [0, 1]).unwrap();
/// let m = SubsetMove::swap([2], [0]);
///
/// m.apply_to(&mut subset).unwrap();
/// assert!(subset.is_selected(2));
/// assert!(!subset.is_selected(0));
///
/// m.undo(&mut subset).unwrap();
/// assert!(subset.is_selected(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SubsetMove {
    add: BTreeSet<usize>,
    delete: BTreeSet<usize>,
}

impl SubsetMove {
    /// Creates a move from the ids to add and the ids to remove.
    ///
    /// Callers must keep the two sets disjoint; neighbourhoods draw them from
    /// the unselected and selected ids respectively.
    pub fn new(add: BTreeSet<usize>, delete: BTreeSet<usize>) -> Self {
        debug_assert!(add.is_disjoint(&delete), "add and delete must be disjoint");
        Self { add, delete }
    }

    /// Creates a move adding and removing the given ids.
    pub fn swap(
        add: impl IntoIterator<Item = usize>,
        delete: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self::new(add.into_iter().collect(), delete.into_iter().collect())
    }

    /// Creates a move that only adds `id`.
    pub fn addition(id: usize) -> Self {
        Self::new(BTreeSet::from([id]), BTreeSet::new())
    }

    /// Creates a move that only removes `id`.
    pub fn deletion(id: usize) -> Self {
        Self::new(BTreeSet::new(), BTreeSet::from([id]))
    }

    pub fn added_ids(&self) -> &BTreeSet<usize> {
        &self.add
    }

    pub fn deleted_ids(&self) -> &BTreeSet<usize> {
        &self.delete
    }

    pub fn num_added(&self) -> usize {
        self.add.len()
    }

    pub fn num_deleted(&self) -> usize {
        self.delete.len()
    }

    /// Returns true if the move adds as many ids as it removes (at least one).
    pub fn is_swap(&self) -> bool {
        !self.add.is_empty() && self.add.len() == self.delete.len()
    }

    /// Returns the move that reverts this one.
    pub fn inverse(&self) -> Self {
        Self {
            add: self.delete.clone(),
            delete: self.add.clone(),
        }
    }

    /// Applies this move to `solution`.
    ///
    /// Every removed id must be selected and every added id must be
    /// unselected. The check runs before any change, so a failed move leaves
    /// the solution untouched.
    ///
    /// # Errors
    /// Returns `IllegalMove` naming the first offending id.
    pub fn apply_to<S: SubsetSolution + ?Sized>(&self, solution: &mut S) -> Result<()> {
        if let Some(id) = self.delete.iter().find(|&&id| !solution.is_selected(id)) {
            return Err(SubsetForgeError::IllegalMove(format!(
                "cannot remove id {id}: it is not selected"
            )));
        }
        if let Some(id) = self
            .add
            .iter()
            .find(|&id| !solution.unselected_ids().contains(id))
        {
            return Err(SubsetForgeError::IllegalMove(format!(
                "cannot add id {id}: it is already selected or unknown"
            )));
        }

        for &id in &self.delete {
            solution.deselect(id);
        }
        for &id in &self.add {
            solution.select(id);
        }
        Ok(())
    }

    /// Reverts this move on a solution it was applied to.
    pub fn undo<S: SubsetSolution + ?Sized>(&self, solution: &mut S) -> Result<()> {
        self.inverse().apply_to(solution)
    }
}

impl fmt::Display for SubsetMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{:?} -{:?}", self.add, self.delete)
    }
}
