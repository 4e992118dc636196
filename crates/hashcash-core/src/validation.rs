//! Argument validation, run before any buffer is allocated.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::format::StampFormat;

/// Inclusive denomination limits a minter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationBounds {
    pub min: u32,
    pub max: u32,
}

impl DenominationBounds {
    /// Create bounds covering `min..=max`.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the bounds.
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for DenominationBounds {
    fn default() -> Self {
        Self { min: 16, max: 32 }
    }
}

/// Reject an empty resource.
pub fn validate_resource(resource: &str) -> Result<(), ValidationError> {
    if resource.is_empty() {
        return Err(ValidationError::InvalidArgument {
            name: "resource",
            reason: "the resource cannot be empty",
        });
    }
    Ok(())
}

/// Reject a denomination of zero or one outside `bounds`.
pub fn validate_denomination(
    value: u32,
    bounds: DenominationBounds,
) -> Result<(), ValidationError> {
    if value == 0 || !bounds.contains(value) {
        return Err(ValidationError::OutOfRange {
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

/// Map a raw version number to a format this minter can produce.
pub fn validate_format(version: u8) -> Result<StampFormat, ValidationError> {
    StampFormat::try_from(version)
}
