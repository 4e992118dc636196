//! Error types for Hashcash Core.

use thiserror::Error;

/// Argument errors detected before any stamp buffer is allocated.
///
/// None of these are retried; each one is fatal to the mint call that
/// raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required argument was empty.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    /// The denomination is outside the configured bounds.
    #[error("denomination {value} out of range: must be between {min} and {max} inclusive")]
    OutOfRange { value: u32, min: u32, max: u32 },

    /// The stamp format version is not one this minter produces.
    #[error("unsupported stamp format version {0}: only version 0 and version 1 are supported")]
    Unsupported(u8),

    /// A stamp format given as text is not a version number.
    #[error("invalid stamp format `{0}`: expected a version number such as 0 or 1")]
    InvalidFormat(String),
}
