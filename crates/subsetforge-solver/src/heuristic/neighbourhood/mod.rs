//! Neighbourhoods for subset selection.
//!
//! A neighbourhood turns the current selection into candidate moves, either
//! one uniformly random move at a time or as the full, lazily generated set.
//!
//! | Neighbourhood                   | Move width                  |
//! |---------------------------------|-----------------------------|
//! | `SingleSwapNeighbourhood`       | 1 added, 1 removed          |
//! | `SingleAdditionNeighbourhood`   | 1 added                     |
//! | `SingleDeletionNeighbourhood`   | 1 removed                   |
//! | `SinglePerturbationNeighbourhood` | any of the three above    |
//! | `MultiSwapNeighbourhood`        | 1..=k added and removed     |
//! | `MultiAdditionNeighbourhood`    | 1..=k added                 |
//! | `MultiDeletionNeighbourhood`    | 1..=k removed               |
//! | `DisjointMultiSwapNeighbourhood` | exactly k added and removed |
//! | `DisjointMultiAdditionNeighbourhood` | exactly k added        |
//! | `DisjointMultiDeletionNeighbourhood` | exactly k removed      |
//!
//! If the current selection does not allow the configured width, the width
//! is reduced to the largest feasible one. A width of zero means no move:
//! `random_move` returns `None` and `iter_moves` is empty.
//!
//! Neighbourhoods are immutable and hold no solution state, so one instance
//! can serve any number of concurrent searches. The random source is always
//! supplied by the caller.
//!
//! The multi and disjoint neighbourhoods grow combinatorially: two
//! simultaneous swaps when selecting 30 out of 100 ids already give over a
//! million moves. Prefer `random_move` over `iter_moves` on large instances.

mod any;
mod disjoint;
mod generate;
mod multi;
mod single;

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;
use std::fmt::Debug;

use rand::Rng;
use subsetforge_core::{Result, SubsetForgeError, SubsetSolution};

use crate::heuristic::r#move::SubsetMove;

pub use any::AnyNeighbourhood;
pub use disjoint::{
    DisjointMultiAdditionNeighbourhood, DisjointMultiDeletionNeighbourhood,
    DisjointMultiSwapNeighbourhood,
};
pub use multi::{MultiAdditionNeighbourhood, MultiDeletionNeighbourhood, MultiSwapNeighbourhood};
pub use single::{
    SingleAdditionNeighbourhood, SingleDeletionNeighbourhood, SinglePerturbationNeighbourhood,
    SingleSwapNeighbourhood,
};

/// Generates moves for a subset solution.
///
/// Implementations are stateless between calls: everything a call depends on
/// is either configured at construction or passed in.
pub trait Neighbourhood: Send + Sync + Debug {
    /// Returns one uniformly random move, or `None` if no move is possible.
    fn random_move<S, R>(&self, solution: &S, rng: &mut R) -> Option<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
        R: Rng + ?Sized;

    /// Returns an iterator over every move, without duplicates.
    ///
    /// Candidate ids are resolved when this is called; the iterator does not
    /// observe later changes to the solution.
    fn iter_moves<'a, S>(&'a self, solution: &'a S) -> impl Iterator<Item = SubsetMove> + 'a
    where
        S: SubsetSolution + ?Sized;

    /// Collects every move.
    fn all_moves<S>(&self, solution: &S) -> Vec<SubsetMove>
    where
        S: SubsetSolution + ?Sized,
    {
        self.iter_moves(solution).collect()
    }

    /// Returns the exact number of moves `iter_moves` yields, saturating at
    /// `u128::MAX`.
    fn move_count<S>(&self, solution: &S) -> u128
    where
        S: SubsetSolution + ?Sized;

    /// Returns the ids this neighbourhood never adds or removes.
    fn fixed_ids(&self) -> &BTreeSet<usize>;
}

fn require_positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(SubsetForgeError::InvalidArgument(format!(
            "{name} should be strictly positive"
        )));
    }
    Ok(value)
}
