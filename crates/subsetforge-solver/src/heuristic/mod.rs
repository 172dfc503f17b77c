//! Heuristic components for subset selection
//!
//! This module contains:
//! - Moves: Transitions between selections
//! - Neighbourhoods: Generators of moves from the current selection
//! - Selectors: Candidate resolution, combinations and sampling

pub mod r#move;
pub mod neighbourhood;
pub mod selector;

// Re-export move types
pub use r#move::SubsetMove;

// Re-export neighbourhood types
pub use neighbourhood::{
    AnyNeighbourhood, DisjointMultiAdditionNeighbourhood, DisjointMultiDeletionNeighbourhood,
    DisjointMultiSwapNeighbourhood, MultiAdditionNeighbourhood, MultiDeletionNeighbourhood,
    MultiSwapNeighbourhood, Neighbourhood, SingleAdditionNeighbourhood,
    SingleDeletionNeighbourhood, SinglePerturbationNeighbourhood, SingleSwapNeighbourhood,
};

// Re-export selector types
pub use selector::{
    add_candidates, binomial, random_element, random_subset, remove_candidates, CandidateSets,
    Combinations,
};
