//! Uniform random subset sampling.

use std::collections::BTreeSet;

use rand::seq::index;
use rand::Rng;

/// Draws a uniformly random `k`-subset of `pool`, without replacement.
///
/// Every one of the `C(pool.len(), k)` subsets is equally likely.
///
/// # Panics
/// Panics if `k > pool.len()`. Neighbourhoods cap `k` before calling.
pub fn random_subset<R: Rng + ?Sized>(pool: &[usize], k: usize, rng: &mut R) -> BTreeSet<usize> {
    assert!(
        k <= pool.len(),
        "cannot sample {k} ids from a pool of {}",
        pool.len()
    );
    index::sample(rng, pool.len(), k)
        .into_iter()
        .map(|i| pool[i])
        .collect()
}

/// Picks one element of `pool` uniformly, or `None` if it is empty.
pub fn random_element<R: Rng + ?Sized>(pool: &[usize], rng: &mut R) -> Option<usize> {
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.random_range(0..pool.len())])
    }
}
