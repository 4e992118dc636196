//! Stamp length planning and the padded stamp buffer.

use crate::alphabet::MAX_COUNTER_DIGITS;
use crate::format::StampFormat;

/// SHA-1 block size; every stamp buffer is a multiple of this.
pub const HASH_BLOCK_LEN: usize = 64;

/// Smallest suffix a [`StampBuffer`] reserves: room for a full-width
/// version 1 counter, its separator, and one random byte.
pub const MINIMUM_RANDOM_FLOOR: usize = MAX_COUNTER_DIGITS + 2;

/// Total stamp length: prefix plus at least `minimum_random` bytes, rounded
/// up to the next multiple of [`HASH_BLOCK_LEN`].
pub const fn padded_length(prefix_len: usize, minimum_random: usize) -> usize {
    let unpadded = prefix_len + minimum_random;
    match unpadded % HASH_BLOCK_LEN {
        0 => unpadded,
        remainder => unpadded + (HASH_BLOCK_LEN - remainder),
    }
}

/// A stamp under construction.
///
/// Bytes `0..prefix_len` hold the prefix and never change. The rest is the
/// suffix region the search mutates; it starts zero-filled.
#[derive(Clone, PartialEq, Eq)]
pub struct StampBuffer {
    bytes: Vec<u8>,
    prefix_len: usize,
    format: StampFormat,
}

impl StampBuffer {
    /// Allocate a padded buffer and copy `prefix` into its head.
    ///
    /// `minimum_random` is raised to [`MINIMUM_RANDOM_FLOOR`] if smaller, so
    /// the counter tail and separator always fit after the prefix.
    pub fn new(prefix: &[u8], format: StampFormat, minimum_random: usize) -> Self {
        let minimum_random = minimum_random.max(MINIMUM_RANDOM_FLOOR);
        let mut bytes = vec![0u8; padded_length(prefix.len(), minimum_random)];
        bytes[..prefix.len()].copy_from_slice(prefix);
        Self {
            bytes,
            prefix_len: prefix.len(),
            format,
        }
    }

    /// Length of the immutable prefix region.
    pub const fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    /// The stamp format this buffer is laid out for.
    pub const fn format(&self) -> StampFormat {
        self.format
    }

    /// Total buffer length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a padded buffer holds at least one hash block.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The whole buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The prefix region.
    pub fn prefix(&self) -> &[u8] {
        &self.bytes[..self.prefix_len]
    }

    /// The suffix region.
    pub fn suffix(&self) -> &[u8] {
        &self.bytes[self.prefix_len..]
    }

    /// Mutable view of the whole buffer, for the search loop.
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Consume the buffer, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl std::fmt::Debug for StampBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StampBuffer")
            .field("prefix", &String::from_utf8_lossy(self.prefix()))
            .field("len", &self.bytes.len())
            .field("format", &self.format)
            .finish()
    }
}
