//! Shared test fixtures for SubsetForge crates.
//!
//! This crate provides solution builders and move checks for testing.
//! It depends on `subsetforge-core` only, so the solver can use it as a
//! dev-dependency without a cycle.
//!
//! - [`fixtures`] - selections used across neighbourhood tests
//! - [`assertions`] - feasibility checks on generated moves
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! subsetforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use subsetforge_test::fixtures::{four_of_ten, subset};
//! use subsetforge_test::assertions::assert_move_within_candidates;
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_move_within_candidates, assert_no_duplicates, MoveShape};
pub use fixtures::{four_of_ten, subset, two_of_ten};
