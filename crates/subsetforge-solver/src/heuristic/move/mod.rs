//! Move system for modifying subset selections.
//!
//! A move describes a selection transition as two disjoint id sets: the ids
//! to add and the ids to remove. Moves hold no reference to the solution they
//! were generated from; the search applies them and, if rejected, undoes them
//! by applying the inverse.
//!
//! - `SubsetMove::swap` - equal numbers of ids added and removed
//! - `SubsetMove::addition` - a single added id
//! - `SubsetMove::deletion` - a single removed id
//! - `SubsetMove::new` - any other combination

mod subset;

#[cfg(test)]
mod tests;

pub use subset::SubsetMove;
