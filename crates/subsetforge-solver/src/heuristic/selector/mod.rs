//! Building blocks shared by all neighbourhoods.
//!
//! - `CandidateSets`: the ids a neighbourhood may remove or add
//! - `Combinations`: lazy enumeration of fixed-size id combinations
//! - `random_subset`: uniform sampling without replacement

pub mod candidates;
pub mod combination;
pub mod sampling;

pub use candidates::{add_candidates, remove_candidates, CandidateSets};
pub use combination::{binomial, Combinations};
pub use sampling::{random_element, random_subset};
