//! Minted stamps.

use std::fmt;

use hashcash_core::{StampDigest, StampFormat};

/// A minted hashcash stamp.
///
/// Immutable once produced. Carries the search metadata alongside the text
/// so callers can log or report the work that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    text: String,
    format: StampFormat,
    requested_denomination: u32,
    digest: StampDigest,
    iterations: u64,
}

impl Stamp {
    pub(crate) fn new(
        text: String,
        format: StampFormat,
        requested_denomination: u32,
        digest: StampDigest,
        iterations: u64,
    ) -> Self {
        Self {
            text,
            format,
            requested_denomination,
            digest,
            iterations,
        }
    }

    /// The stamp text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Take ownership of the stamp text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// The format the stamp was minted in.
    pub fn format(&self) -> StampFormat {
        self.format
    }

    /// The denomination asked for at mint time.
    pub fn requested_denomination(&self) -> u32 {
        self.requested_denomination
    }

    /// SHA-1 digest of the stamp text.
    pub fn digest(&self) -> StampDigest {
        self.digest
    }

    /// Number of hashes computed during the search.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Leading zero bits actually achieved; never below the requested denomination.
    pub fn denomination(&self) -> u32 {
        self.digest.leading_zero_bits()
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Stamp {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Stamp> for String {
    fn from(stamp: Stamp) -> Self {
        stamp.text
    }
}
