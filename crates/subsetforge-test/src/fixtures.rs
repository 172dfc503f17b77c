//! Selections shared by neighbourhood tests.

use subsetforge_core::Subset;

/// Builds a selection over `0..num_ids`.
///
/// # Panics
/// Panics if a selected id lies outside the universe.
pub fn subset(num_ids: usize, selected: &[usize]) -> Subset {
    Subset::with_selection(num_ids, selected.iter().copied())
        .expect("fixture ids must lie in the universe")
}

/// Ten ids with `{0, 1, 2, 3}` selected.
pub fn four_of_ten() -> Subset {
    subset(10, &[0, 1, 2, 3])
}

/// Ten ids with `{0, 1}` selected.
pub fn two_of_ten() -> Subset {
    subset(10, &[0, 1])
}
