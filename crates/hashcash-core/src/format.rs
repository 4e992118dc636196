//! Stamp wire formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The layout of a stamp.
///
/// - `Version0`: `0:YYMMDD:<resource>:<random>`
/// - `Version1`: `1:<bits>:YYMMDD:<resource>::<random>:<counter>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum StampFormat {
    #[default]
    Version0 = 0,
    Version1 = 1,
}

impl StampFormat {
    /// The version number written as the first stamp field.
    pub const fn version(self) -> u8 {
        self as u8
    }

    /// Whether the search writes a counter tail into the suffix.
    pub const fn uses_counter(self) -> bool {
        matches!(self, Self::Version1)
    }

    /// Number of `:`-separated fields in a minted stamp of this format.
    ///
    /// Version 1 counts the empty extension field and the counter field
    /// that follows the separator.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Version0 => 4,
            Self::Version1 => 7,
        }
    }
}

impl TryFrom<u8> for StampFormat {
    type Error = ValidationError;

    fn try_from(version: u8) -> Result<Self, Self::Error> {
        match version {
            0 => Ok(Self::Version0),
            1 => Ok(Self::Version1),
            other => Err(ValidationError::Unsupported(other)),
        }
    }
}

impl From<StampFormat> for u8 {
    fn from(format: StampFormat) -> Self {
        format.version()
    }
}

impl fmt::Display for StampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version())
    }
}

impl FromStr for StampFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("version")
            .or_else(|| lower.strip_prefix('v'))
            .unwrap_or(lower.as_str());
        match digits.parse::<u8>() {
            Ok(version) => Self::try_from(version),
            Err(_) => Err(ValidationError::InvalidFormat(s.trim().to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_versions() {
        assert_eq!(StampFormat::try_from(0), Ok(StampFormat::Version0));
        assert_eq!(StampFormat::try_from(1), Ok(StampFormat::Version1));
    }

    #[test]
    fn test_unknown_version_unsupported() {
        assert_eq!(
            StampFormat::try_from(2),
            Err(ValidationError::Unsupported(2))
        );
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("1".parse::<StampFormat>(), Ok(StampFormat::Version1));
        assert_eq!("v0".parse::<StampFormat>(), Ok(StampFormat::Version0));
        assert_eq!("Version1".parse::<StampFormat>(), Ok(StampFormat::Version1));
        assert_eq!(
            "version7".parse::<StampFormat>(),
            Err(ValidationError::Unsupported(7))
        );
    }

    #[test]
    fn test_parse_non_numeric_keeps_input() {
        assert_eq!(
            "abc".parse::<StampFormat>(),
            Err(ValidationError::InvalidFormat("abc".into()))
        );
        // Out of u8 range: not reported as some other version.
        let err = " 300 ".parse::<StampFormat>().unwrap_err();
        assert_eq!(err, ValidationError::InvalidFormat("300".into()));
        assert!(err.to_string().contains("`300`"));
    }

    #[test]
    fn test_counter_only_in_v1() {
        assert!(!StampFormat::Version0.uses_counter());
        assert!(StampFormat::Version1.uses_counter());
    }

    #[test]
    fn test_default_is_v0() {
        assert_eq!(StampFormat::default(), StampFormat::Version0);
    }
}
