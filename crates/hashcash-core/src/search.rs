//! Partial-collision search: the proof-of-work loop.
//!
//! Each iteration overwrites one random byte of the suffix with a random
//! alphabet symbol, hashes the whole buffer and checks the bit-scan. Earlier
//! writes persist, so the suffix drifts one byte at a time.
//!
//! Version 1 stamps also carry a counter at the very end of the buffer,
//! rewritten every iteration as the iteration number in alphabet digits and preceded
//! by a `:` separator. Random writes stay to the left of the separator.
//!
//! There is no iteration cap. The loop runs until it succeeds.

use rand::Rng;
use tracing::{debug, trace};

use crate::alphabet::{random_symbol, CounterDigits};
use crate::digest::StampDigest;
use crate::padding::StampBuffer;

/// Byte written between the random region and the version 1 counter.
pub const COUNTER_SEPARATOR: u8 = b':';

/// Iterations between progress trace events.
const PROGRESS_INTERVAL: u64 = 1 << 22;

/// A finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The minted stamp bytes (always ASCII).
    pub bytes: Vec<u8>,
    /// Digest of `bytes`.
    pub digest: StampDigest,
    /// Number of hashes computed.
    pub iterations: u64,
    /// Leading zero bits of `digest`; at least the required denomination.
    pub denomination: u32,
}

impl SearchOutcome {
    /// Decode the stamp bytes as text.
    pub fn to_ascii_string(&self) -> String {
        self.bytes.iter().map(|&b| char::from(b)).collect()
    }
}

/// Search until the buffer's digest carries at least `required` leading zero bits.
///
/// `required` must not exceed 160 or the loop never ends.
pub fn find_collision<R: Rng + ?Sized>(
    mut buffer: StampBuffer,
    required: u32,
    rng: &mut R,
) -> SearchOutcome {
    let format = buffer.format();
    let lower = buffer.prefix_len();
    let len = buffer.len();
    let mut counter = CounterDigits::new();
    let mut iterations: u64 = 0;

    debug!(
        %format,
        required,
        prefix_len = lower,
        len,
        "starting collision search"
    );

    loop {
        let bytes = buffer.bytes_mut();

        let upper = if format.uses_counter() {
            counter.set(iterations);
            let tail_start = len - counter.len();
            bytes[tail_start..].copy_from_slice(counter.as_bytes());
            let separator = tail_start - 1;
            bytes[separator] = COUNTER_SEPARATOR;
            separator
        } else {
            len
        };

        // StampBuffer reserves MINIMUM_RANDOM_FLOOR suffix bytes, so the
        // separator never lands inside the prefix.
        if upper > lower {
            let position = rng.gen_range(lower..upper);
            bytes[position] = random_symbol(rng);
        }

        let digest = StampDigest::compute(bytes);
        iterations += 1;

        let denomination = digest.leading_zero_bits();
        if denomination >= required {
            debug!(iterations, denomination, digest = %digest, "collision found");
            return SearchOutcome {
                bytes: buffer.into_bytes(),
                digest,
                iterations,
                denomination,
            };
        }

        if iterations % PROGRESS_INTERVAL == 0 {
            trace!(iterations, required, "collision search in progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::symbol_index;
    use crate::digest::stamp_denomination;
    use crate::format::StampFormat;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blank(prefix: &[u8], format: StampFormat) -> StampBuffer {
        StampBuffer::new(prefix, format, 16)
    }

    #[test]
    fn test_version0_meets_denomination() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = find_collision(blank(b"0:090307:foo:", StampFormat::Version0), 10, &mut rng);

        assert!(outcome.denomination >= 10);
        assert_eq!(stamp_denomination(&outcome.bytes), outcome.denomination);
        assert_eq!(StampDigest::compute(&outcome.bytes), outcome.digest);
        assert_eq!(outcome.bytes.len(), 64);
        assert!(outcome.bytes.starts_with(b"0:090307:foo:"));
    }

    #[test]
    fn test_version1_counter_tail() {
        let mut rng = StdRng::seed_from_u64(2);
        let prefix = b"1:10:090307:foo::";
        let outcome = find_collision(blank(prefix, StampFormat::Version1), 10, &mut rng);

        assert!(outcome.denomination >= 10);
        assert!(outcome.bytes.starts_with(prefix));

        // The last hashed iteration used counter value `iterations - 1`.
        let expected = CounterDigits::encode(outcome.iterations - 1);
        let tail = &outcome.bytes[outcome.bytes.len() - expected.len()..];
        assert_eq!(tail, expected.as_bytes());
        assert_eq!(
            outcome.bytes[outcome.bytes.len() - expected.len() - 1],
            COUNTER_SEPARATOR
        );

        let text = outcome.to_ascii_string();
        let fields: Vec<&str> = text.split(':').collect();
        assert_eq!(fields.len(), StampFormat::Version1.field_count());
        assert_eq!(fields[0], "1");
        assert_eq!(fields[1], "10");
        assert_eq!(fields[4], "");
    }

    #[test]
    fn test_suffix_bytes_from_alphabet_or_blank() {
        let mut rng = StdRng::seed_from_u64(3);
        let prefix = b"0:090307:bar:";
        let outcome = find_collision(blank(prefix, StampFormat::Version0), 12, &mut rng);

        for &b in &outcome.bytes[prefix.len()..] {
            assert!(b == 0 || symbol_index(b).is_some(), "unexpected byte {b:#x}");
        }
    }

    #[test]
    fn test_zero_required_returns_first_iteration() {
        let mut rng = StdRng::seed_from_u64(4);
        let outcome = find_collision(blank(b"0:090307:x:", StampFormat::Version0), 0, &mut rng);
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_seeded_search_is_reproducible() {
        let prefix = b"1:8:090307:seeded::";
        let a = find_collision(
            blank(prefix, StampFormat::Version1),
            8,
            &mut StdRng::seed_from_u64(99),
        );
        let b = find_collision(
            blank(prefix, StampFormat::Version1),
            8,
            &mut StdRng::seed_from_u64(99),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_untouched_with_zero_minimum_random() {
        let prefix = [b'p'; 64];
        let mut rng = StdRng::seed_from_u64(6);
        let outcome = find_collision(
            StampBuffer::new(&prefix, StampFormat::Version1, 0),
            4,
            &mut rng,
        );
        assert_eq!(&outcome.bytes[..64], &prefix[..]);
        assert_eq!(outcome.bytes.len(), 128);
        assert!(outcome.denomination >= 4);
    }

    #[test]
    fn test_empty_prefix_version1() {
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = find_collision(StampBuffer::new(b"", StampFormat::Version1, 0), 4, &mut rng);
        assert_eq!(outcome.bytes.len(), 64);
        assert!(outcome.denomination >= 4);
    }

    #[test]
    fn test_output_is_ascii() {
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = find_collision(blank(b"1:6:090307:a::", StampFormat::Version1), 6, &mut rng);
        assert!(outcome.bytes.is_ascii());
        assert_eq!(outcome.to_ascii_string().len(), outcome.bytes.len());
    }
}
