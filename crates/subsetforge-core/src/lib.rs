//! SubsetForge Core - Core types and traits for subset selection
//!
//! This crate provides the fundamental abstractions for SubsetForge:
//! - The `SubsetSolution` contract that neighbourhoods query and moves mutate
//! - `Subset`, a reference implementation backed by ordered id sets
//! - The shared error type

pub mod domain;
pub mod error;

pub use domain::{Subset, SubsetSolution};
pub use error::{Result, SubsetForgeError};
