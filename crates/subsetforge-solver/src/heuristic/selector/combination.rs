//! Lazy k-combination enumeration.
//!
//! The number of combinations grows quickly (choosing 2 out of 70 already
//! gives 2415, and exhaustive swap neighbourhoods multiply two such counts),
//! so combinations are produced one at a time and never materialized.

use std::sync::Arc;

use smallvec::SmallVec;

/// Iterator over all `k`-element combinations of a candidate pool.
///
/// Combinations are yielded in lexicographic order of their pool indices, so
/// for an ascending pool every combination is itself ascending. The iterator
/// is single-pass; create a new one to enumerate again.
///
/// If `k` exceeds the pool size the iterator is empty. For `k == 0` it yields
/// one empty combination.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use subsetforge_solver::heuristic::selector::Combinations;
///
/// let pool: Arc<[usize]> = Arc::from(vec![3, 5, 8]);
/// let all: Vec<_> = Combinations::new(pool, 2).collect();
/// assert_eq!(all, vec![vec![3, 5], vec![3, 8], vec![5, 8]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    pool: Arc<[usize]>,
    /// Current pool indices, strictly increasing.
    indices: SmallVec<[usize; 8]>,
    /// Whether we've exhausted all combinations.
    done: bool,
}

impl Combinations {
    pub fn new(pool: Arc<[usize]>, k: usize) -> Self {
        let done = k > pool.len();
        let indices = if done { SmallVec::new() } else { (0..k).collect() };
        Self {
            pool,
            indices,
            done,
        }
    }

    /// Returns the combination size.
    pub fn k(&self) -> usize {
        self.indices.len()
    }

    fn advance(&mut self) {
        let k = self.indices.len();
        let n = self.pool.len();

        // Find the rightmost index that can still move right
        for i in (0..k).rev() {
            // Leave room for the (k - i - 1) indices after this one
            let max_index = n - (k - i);

            if self.indices[i] < max_index {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return;
            }
        }

        self.done = true;
    }

    fn remaining(&self) -> u128 {
        if self.done {
            return 0;
        }
        // Combinations at or after the current one: count the ones strictly
        // after it via the combinatorial number system, then add one.
        let n = self.pool.len();
        let k = self.indices.len();
        let rank_from_end: u128 = self
            .indices
            .iter()
            .enumerate()
            .map(|(i, &idx)| binomial(n - 1 - idx, k - i))
            .fold(0u128, u128::saturating_add);
        rank_from_end.saturating_add(1)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combination = self.indices.iter().map(|&i| self.pool[i]).collect();
        self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Combinations {}

/// Compute binomial coefficient C(n, k), saturating at `u128::MAX`.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }

    let k = k.min(n - k); // Use symmetry
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = match result.checked_mul((n - i) as u128) {
            Some(product) => product / (i as u128 + 1),
            None => return u128::MAX,
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn pool(ids: &[usize]) -> Arc<[usize]> {
        Arc::from(ids)
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<_> = Combinations::new(pool(&[0, 1, 2, 3]), 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_count_matches_binomial() {
        for n in 0..9 {
            let ids: Vec<usize> = (100..100 + n).collect();
            for k in 0..=n + 1 {
                let count = Combinations::new(pool(&ids), k).count() as u128;
                assert_eq!(count, binomial(n, k), "C({n}, {k})");
            }
        }
    }

    #[test]
    fn test_combinations_are_distinct_and_sized() {
        let combos: Vec<_> = Combinations::new(pool(&[2, 4, 6, 8, 10, 12]), 3).collect();
        let unique: BTreeSet<_> = combos.iter().cloned().collect();
        assert_eq!(unique.len(), combos.len());
        assert!(combos.iter().all(|c| c.len() == 3));
        assert!(combos.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
    }

    #[test]
    fn test_k_larger_than_pool_is_empty() {
        let mut it = Combinations::new(pool(&[1, 2]), 3);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert!(it.next().is_none());
    }

    #[test]
    fn test_k_zero_yields_single_empty_combination() {
        let all: Vec<_> = Combinations::new(pool(&[1, 2]), 0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);

        let empty_pool: Vec<_> = Combinations::new(pool(&[]), 0).collect();
        assert_eq!(empty_pool.len(), 1);
    }

    #[test]
    fn test_full_width() {
        let all: Vec<_> = Combinations::new(pool(&[7, 8, 9]), 3).collect();
        assert_eq!(all, vec![vec![7, 8, 9]]);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut it = Combinations::new(pool(&[0, 1, 2, 3, 4]), 2);
        assert_eq!(it.size_hint(), (10, Some(10)));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (8, Some(8)));
        assert_eq!(it.count(), 8);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut it = Combinations::new(pool(&[1]), 1);
        assert_eq!(it.next(), Some(vec![1]));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(6, 2), 15);
        assert_eq!(binomial(3, 2), 3);
        assert_eq!(binomial(4, 5), 0);
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(100, 30), binomial(100, 70));
        assert_eq!(binomial(10_000, 5_000), u128::MAX);
    }
}
