//! Error types for the Minter.

use hashcash_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while minting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MintError {
    /// A mint argument was rejected before any work began.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The minter configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MintError {
    /// The underlying validation error, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

/// Result type for Minter operations.
pub type Result<T> = std::result::Result<T, MintError>;
