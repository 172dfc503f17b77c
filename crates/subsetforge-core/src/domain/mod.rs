//! Domain model for subset selection problems
//!
//! - `SubsetSolution`: the query and mutation contract of a selection
//! - `Subset`: an owned selection over a fixed universe of ids

mod subset;
mod traits;


pub use subset::Subset;
pub use traits::SubsetSolution;
