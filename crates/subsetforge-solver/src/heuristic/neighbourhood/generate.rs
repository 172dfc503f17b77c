//! Move streams and width arithmetic shared by the neighbourhoods.

use std::collections::BTreeSet;
use std::sync::Arc;

use rand::Rng;
use tracing::trace;

use crate::heuristic::r#move::SubsetMove;
use crate::heuristic::selector::{binomial, random_subset, CandidateSets, Combinations};

/// Largest feasible number of simultaneous swaps.
pub(super) fn swap_width(requested: usize, candidates: &CandidateSets) -> usize {
    requested
        .min(candidates.num_remove())
        .min(candidates.num_add())
}

/// Largest feasible number of simultaneous additions.
pub(super) fn addition_width(
    requested: usize,
    candidates: &CandidateSets,
    num_selected: usize,
    max_subset_size: usize,
) -> usize {
    requested
        .min(candidates.num_add())
        .min(max_subset_size.saturating_sub(num_selected))
}

/// Largest feasible number of simultaneous deletions.
pub(super) fn deletion_width(
    requested: usize,
    candidates: &CandidateSets,
    num_selected: usize,
    min_subset_size: usize,
) -> usize {
    requested
        .min(candidates.num_remove())
        .min(num_selected.saturating_sub(min_subset_size))
}

pub(super) fn trace_capped(neighbourhood: &'static str, requested: usize, effective: usize) {
    if effective < requested {
        trace!(
            event = "width_capped",
            neighbourhood = neighbourhood,
            requested = requested,
            effective = effective,
        );
    }
}

/// Every move swapping exactly `k` ids. The inner enumeration restarts for
/// each removed combination.
pub(super) fn swap_moves(
    remove: Arc<[usize]>,
    add: Arc<[usize]>,
    k: usize,
) -> impl Iterator<Item = SubsetMove> {
    Combinations::new(remove, k).flat_map(move |delete| {
        let delete: BTreeSet<usize> = delete.into_iter().collect();
        Combinations::new(Arc::clone(&add), k)
            .map(move |added| SubsetMove::new(added.into_iter().collect(), delete.clone()))
    })
}

/// Every move adding exactly `k` ids.
pub(super) fn addition_moves(add: Arc<[usize]>, k: usize) -> impl Iterator<Item = SubsetMove> {
    Combinations::new(add, k)
        .map(|added| SubsetMove::new(added.into_iter().collect(), BTreeSet::new()))
}

/// Every move removing exactly `k` ids.
pub(super) fn deletion_moves(remove: Arc<[usize]>, k: usize) -> impl Iterator<Item = SubsetMove> {
    Combinations::new(remove, k)
        .map(|deleted| SubsetMove::new(BTreeSet::new(), deleted.into_iter().collect()))
}

pub(super) fn swap_count(candidates: &CandidateSets, k: usize) -> u128 {
    binomial(candidates.num_remove(), k).saturating_mul(binomial(candidates.num_add(), k))
}

/// Draws the removed and the added ids independently.
pub(super) fn random_swap<R: Rng + ?Sized>(
    candidates: &CandidateSets,
    k: usize,
    rng: &mut R,
) -> SubsetMove {
    let delete = random_subset(&candidates.remove, k, rng);
    let add = random_subset(&candidates.add, k, rng);
    SubsetMove::new(add, delete)
}
