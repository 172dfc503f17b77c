//! SubsetForge - Neighbourhoods for subset selection in Rust
//!
//! Pick a neighbourhood, hand it the current selection and a random source,
//! and apply the moves it returns.
//!
//! # Example
//!
//! ```rust
//! use subsetforge::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut solution = Subset::with_selection(10, [0, 1, 2, 3]).unwrap();
//! let neighbourhood = DisjointMultiSwapNeighbourhood::new(2)
//!     .unwrap()
//!     .with_fixed_ids([0]);
//! assert_eq!(neighbourhood.move_count(&solution), 45);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let m = neighbourhood.random_move(&solution, &mut rng).unwrap();
//! m.apply_to(&mut solution).unwrap();
//! assert_eq!(solution.num_selected_ids(), 4);
//! assert!(solution.is_selected(0));
//! ```

// Domain types
pub use subsetforge_core::{Result, Subset, SubsetForgeError, SubsetSolution};

// Configuration
pub use subsetforge_config::{ConfigError, NeighbourhoodConfig, SubsetConfig};

// Moves and neighbourhoods
pub use subsetforge_solver::{
    AnyNeighbourhood, DisjointMultiAdditionNeighbourhood, DisjointMultiDeletionNeighbourhood,
    DisjointMultiSwapNeighbourhood, MultiAdditionNeighbourhood, MultiDeletionNeighbourhood,
    MultiSwapNeighbourhood, Neighbourhood, NeighbourhoodBuilder, SingleAdditionNeighbourhood,
    SingleDeletionNeighbourhood, SinglePerturbationNeighbourhood, SingleSwapNeighbourhood,
    SubsetMove,
};

// Building blocks for custom neighbourhoods
pub use subsetforge_solver::heuristic::selector;

pub mod prelude {
    pub use super::{
        AnyNeighbourhood, DisjointMultiAdditionNeighbourhood, DisjointMultiDeletionNeighbourhood,
        DisjointMultiSwapNeighbourhood, MultiAdditionNeighbourhood, MultiDeletionNeighbourhood,
        MultiSwapNeighbourhood, Neighbourhood, SingleAdditionNeighbourhood,
        SingleDeletionNeighbourhood, SinglePerturbationNeighbourhood, SingleSwapNeighbourhood,
    };
    pub use super::{NeighbourhoodBuilder, NeighbourhoodConfig, SubsetConfig};
    pub use super::{Subset, SubsetForgeError, SubsetMove, SubsetSolution};
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::prelude::*;

    #[test]
    fn test_configured_search_keeps_selection_size() {
        let config = SubsetConfig::from_yaml_str(
            r#"
random_seed: 3
neighbourhoods:
  - type: single_swap
    fixed_ids: [1]
  - type: multi_swap
    max_swaps: 2
"#,
        )
        .unwrap();
        let neighbourhoods = NeighbourhoodBuilder::build_all(&config).unwrap();

        let mut solution = Subset::with_selection(8, [1, 2, 3]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(config.random_seed.unwrap_or_default());
        for step in 0..100 {
            let neighbourhood = &neighbourhoods[step % neighbourhoods.len()];
            let m = neighbourhood.random_move(&solution, &mut rng).unwrap();
            m.apply_to(&mut solution).unwrap();
        }

        assert_eq!(solution.num_selected_ids(), 3);
    }

    #[test]
    fn test_rejected_move_is_undone() {
        let mut solution = Subset::with_selection(6, [0, 1]).unwrap();
        let before = solution.clone();
        let neighbourhood = MultiAdditionNeighbourhood::new(3, 6).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let m = neighbourhood.random_move(&solution, &mut rng).unwrap();
        m.apply_to(&mut solution).unwrap();
        assert_ne!(solution, before);
        m.undo(&mut solution).unwrap();
        assert_eq!(solution, before);
    }
}
