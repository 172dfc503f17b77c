//! SubsetForge Solver Engine
//!
//! This crate provides the move generation for subset selection local search:
//! - Move system (`SubsetMove`)
//! - Neighbourhoods (single, multi and disjoint variants)
//! - Candidate resolution, combination enumeration and sampling
//! - Configuration wiring (builder module)

pub mod builder;
pub mod heuristic;

pub use builder::NeighbourhoodBuilder;
pub use heuristic::{
    // Selectors
    add_candidates,
    binomial,
    random_element,
    random_subset,
    remove_candidates,
    // Neighbourhoods
    AnyNeighbourhood,
    CandidateSets,
    Combinations,
    DisjointMultiAdditionNeighbourhood,
    DisjointMultiDeletionNeighbourhood,
    DisjointMultiSwapNeighbourhood,
    MultiAdditionNeighbourhood,
    MultiDeletionNeighbourhood,
    MultiSwapNeighbourhood,
    Neighbourhood,
    SingleAdditionNeighbourhood,
    SingleDeletionNeighbourhood,
    SinglePerturbationNeighbourhood,
    SingleSwapNeighbourhood,
    // Move types
    SubsetMove,
};
