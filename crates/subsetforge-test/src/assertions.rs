//! Feasibility checks on generated moves.

use std::collections::{BTreeSet, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use subsetforge_core::SubsetSolution;

/// Read access to the two id sets of a move.
pub trait MoveShape {
    fn added(&self) -> &BTreeSet<usize>;
    fn deleted(&self) -> &BTreeSet<usize>;
}

/// Asserts that `m` only adds unselected, non-fixed ids and only removes
/// selected, non-fixed ids.
pub fn assert_move_within_candidates<M, S>(m: &M, solution: &S, fixed_ids: &BTreeSet<usize>)
where
    M: MoveShape + Debug,
    S: SubsetSolution + ?Sized,
{
    assert!(
        m.added().is_disjoint(m.deleted()),
        "{m:?} adds and removes the same id"
    );
    for id in m.added() {
        assert!(
            solution.unselected_ids().contains(id),
            "{m:?} adds {id}, which is not unselected"
        );
        assert!(!fixed_ids.contains(id), "{m:?} adds fixed id {id}");
    }
    for id in m.deleted() {
        assert!(
            solution.selected_ids().contains(id),
            "{m:?} removes {id}, which is not selected"
        );
        assert!(!fixed_ids.contains(id), "{m:?} removes fixed id {id}");
    }
}

/// Asserts that no move occurs twice.
pub fn assert_no_duplicates<M>(moves: &[M])
where
    M: Eq + Hash + Debug,
{
    let mut seen = HashSet::with_capacity(moves.len());
    for m in moves {
        assert!(seen.insert(m), "duplicate move {m:?}");
    }
}
