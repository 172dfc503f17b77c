//! Builder module for constructing neighbourhoods from configuration
//!
//! This module provides the wiring between configuration types and
//! the neighbourhood implementations.

use rand::rngs::StdRng;
use rand::SeedableRng;
use subsetforge_config::{NeighbourhoodConfig, SubsetConfig};
use subsetforge_core::Result;
use tracing::debug;

use crate::heuristic::neighbourhood::{
    AnyNeighbourhood, DisjointMultiAdditionNeighbourhood, DisjointMultiDeletionNeighbourhood,
    DisjointMultiSwapNeighbourhood, MultiAdditionNeighbourhood, MultiDeletionNeighbourhood,
    MultiSwapNeighbourhood, SingleAdditionNeighbourhood, SingleDeletionNeighbourhood,
    SinglePerturbationNeighbourhood, SingleSwapNeighbourhood,
};

/// Builder for constructing neighbourhoods from configuration.
pub struct NeighbourhoodBuilder;

impl NeighbourhoodBuilder {
    /// Builds a neighbourhood from configuration.
    ///
    /// An absent `max_subset_size` means the selection size is unbounded.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for non-positive counts or inverted bounds.
    pub fn build(config: &NeighbourhoodConfig) -> Result<AnyNeighbourhood> {
        let fixed_ids = config.fixed_ids().iter().copied();
        let neighbourhood: AnyNeighbourhood = match config {
            NeighbourhoodConfig::SingleSwap(_) => {
                SingleSwapNeighbourhood::new().with_fixed_ids(fixed_ids).into()
            }

            NeighbourhoodConfig::SingleAddition(c) => match c.max_subset_size {
                Some(max) => SingleAdditionNeighbourhood::new(max)?,
                None => SingleAdditionNeighbourhood::unbounded(),
            }
            .with_fixed_ids(fixed_ids)
            .into(),

            NeighbourhoodConfig::SingleDeletion(c) => {
                SingleDeletionNeighbourhood::new(c.min_subset_size)
                    .with_fixed_ids(fixed_ids)
                    .into()
            }

            NeighbourhoodConfig::SinglePerturbation(c) => SinglePerturbationNeighbourhood::new(
                c.min_subset_size,
                c.max_subset_size.unwrap_or(usize::MAX),
            )?
            .with_fixed_ids(fixed_ids)
            .into(),

            NeighbourhoodConfig::MultiSwap(c) => MultiSwapNeighbourhood::new(c.max_swaps)?
                .with_fixed_ids(fixed_ids)
                .into(),

            NeighbourhoodConfig::MultiAddition(c) => MultiAdditionNeighbourhood::new(
                c.max_additions,
                c.max_subset_size.unwrap_or(usize::MAX),
            )?
            .with_fixed_ids(fixed_ids)
            .into(),

            NeighbourhoodConfig::MultiDeletion(c) => {
                MultiDeletionNeighbourhood::new(c.max_deletions, c.min_subset_size)?
                    .with_fixed_ids(fixed_ids)
                    .into()
            }

            NeighbourhoodConfig::DisjointMultiSwap(c) => {
                DisjointMultiSwapNeighbourhood::new(c.num_swaps)?
                    .with_fixed_ids(fixed_ids)
                    .into()
            }

            NeighbourhoodConfig::DisjointMultiAddition(c) => {
                DisjointMultiAdditionNeighbourhood::new(
                    c.num_additions,
                    c.max_subset_size.unwrap_or(usize::MAX),
                )?
                .with_fixed_ids(fixed_ids)
                .into()
            }

            NeighbourhoodConfig::DisjointMultiDeletion(c) => {
                DisjointMultiDeletionNeighbourhood::new(c.num_deletions, c.min_subset_size)?
                    .with_fixed_ids(fixed_ids)
                    .into()
            }
        };

        debug!(
            event = "neighbourhood_built",
            neighbourhood = config.type_name(),
            fixed_ids = config.fixed_ids().len(),
        );
        Ok(neighbourhood)
    }

    /// Builds every neighbourhood of a configuration, in order.
    pub fn build_all(config: &SubsetConfig) -> Result<Vec<AnyNeighbourhood>> {
        config.neighbourhoods.iter().map(Self::build).collect()
    }

    /// Creates a random number generator, seeded if a seed is given.
    ///
    /// Each search thread should own its generator; derive per-thread seeds
    /// from the configured one rather than sharing a single generator.
    pub fn rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use subsetforge_config::{
        DisjointMultiSwapConfig, MultiAdditionConfig, SingleAdditionConfig,
    };
    use subsetforge_core::SubsetForgeError;
    use subsetforge_test::four_of_ten;

    use super::*;
    use crate::heuristic::neighbourhood::Neighbourhood;

    #[test]
    fn test_build_disjoint_multi_swap() {
        let config = NeighbourhoodConfig::DisjointMultiSwap(DisjointMultiSwapConfig {
            num_swaps: 2,
            fixed_ids: BTreeSet::from([0]),
        });

        let neighbourhood = NeighbourhoodBuilder::build(&config).unwrap();
        let expected = DisjointMultiSwapNeighbourhood::new(2)
            .unwrap()
            .with_fixed_ids([0]);
        assert_eq!(neighbourhood, AnyNeighbourhood::from(expected));
        assert_eq!(neighbourhood.move_count(&four_of_ten()), 45);
    }

    #[test]
    fn test_build_zero_count_fails() {
        let config = NeighbourhoodConfig::DisjointMultiSwap(DisjointMultiSwapConfig {
            num_swaps: 0,
            fixed_ids: BTreeSet::new(),
        });
        assert!(matches!(
            NeighbourhoodBuilder::build(&config),
            Err(SubsetForgeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_max_size_is_unbounded() {
        let config = NeighbourhoodConfig::MultiAddition(MultiAdditionConfig {
            max_additions: 2,
            max_subset_size: None,
            fixed_ids: BTreeSet::new(),
        });
        let neighbourhood = NeighbourhoodBuilder::build(&config).unwrap();
        // 6 + 15 additions on top of four selected ids
        assert_eq!(neighbourhood.move_count(&four_of_ten()), 21);

        let config = NeighbourhoodConfig::SingleAddition(SingleAdditionConfig {
            max_subset_size: Some(4),
            fixed_ids: BTreeSet::new(),
        });
        let neighbourhood = NeighbourhoodBuilder::build(&config).unwrap();
        assert_eq!(neighbourhood.move_count(&four_of_ten()), 0);
    }

    #[test]
    fn test_build_all_from_toml() {
        let config = SubsetConfig::from_toml_str(
            r#"
            random_seed = 11

            [[neighbourhoods]]
            type = "single_swap"
            fixed_ids = [0]

            [[neighbourhoods]]
            type = "single_perturbation"
            min_subset_size = 3
            max_subset_size = 5

            [[neighbourhoods]]
            type = "multi_deletion"
            max_deletions = 5
            min_subset_size = 1

            [[neighbourhoods]]
            type = "disjoint_multi_deletion"
            num_deletions = 2
        "#,
        )
        .unwrap();

        let neighbourhoods = NeighbourhoodBuilder::build_all(&config).unwrap();
        let solution = four_of_ten();
        let counts: Vec<u128> = neighbourhoods
            .iter()
            .map(|n| n.move_count(&solution))
            .collect();
        assert_eq!(counts, vec![18, 34, 14, 6]);

        let mut rng = NeighbourhoodBuilder::rng(config.random_seed);
        for n in &neighbourhoods {
            let m = n.random_move(&solution, &mut rng).unwrap();
            assert!(m.deleted_ids().iter().all(|id| !n.fixed_ids().contains(id)));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let neighbourhood = AnyNeighbourhood::from(MultiSwapNeighbourhood::new(3).unwrap());
        let solution = four_of_ten();

        let mut a = NeighbourhoodBuilder::rng(Some(5));
        let mut b = NeighbourhoodBuilder::rng(Some(5));
        for _ in 0..20 {
            assert_eq!(
                neighbourhood.random_move(&solution, &mut a),
                neighbourhood.random_move(&solution, &mut b)
            );
        }
    }
}
