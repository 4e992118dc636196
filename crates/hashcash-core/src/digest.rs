//! SHA-1 stamp digests and the denomination bit-scan.

use sha1::{Digest, Sha1};
use std::fmt;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Number of bits in a digest; the highest denomination a stamp can carry.
pub const DIGEST_BITS: u32 = (DIGEST_LEN * 8) as u32;

/// A 20-byte SHA-1 digest of a stamp buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StampDigest(pub [u8; DIGEST_LEN]);

impl StampDigest {
    /// Hash the given stamp bytes.
    pub fn compute(data: &[u8]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&Sha1::digest(data));
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Count zero bits from the start of the digest up to the first 1-bit.
    ///
    /// Bytes are scanned in order, and within each byte bits are tested
    /// from least-significant to most-significant. Bit 0 is bit 0 of byte 0,
    /// bit 8 is bit 0 of byte 1. This is not the big-endian convention most
    /// hashcash tools use.
    pub fn leading_zero_bits(&self) -> u32 {
        let mut zeros = 0;
        for byte in self.0 {
            if byte != 0 {
                return zeros + byte.trailing_zeros();
            }
            zeros += 8;
        }
        zeros
    }

    /// Whether this digest meets `required` bits.
    pub fn meets(&self, required: u32) -> bool {
        self.leading_zero_bits() >= required
    }
}

impl fmt::Debug for StampDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha1({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for StampDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for StampDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for StampDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

/// The denomination a stamp actually carries: hash it and bit-scan the digest.
pub fn stamp_denomination(stamp: &[u8]) -> u32 {
    StampDigest::compute(stamp).leading_zero_bits()
}
