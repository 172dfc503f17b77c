//! Error types for SubsetForge

use thiserror::Error;

/// Main error type for SubsetForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsetForgeError {
    /// A constructor or builder received an out-of-range parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A move does not fit the solution it is applied to
    #[error("Illegal move: {0}")]
    IllegalMove(String),
}

impl SubsetForgeError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type alias for SubsetForge operations
pub type Result<T> = std::result::Result<T, SubsetForgeError>;
