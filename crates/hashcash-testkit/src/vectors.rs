//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the parts of a stamp that must be bit-exact across
//! implementations: prefix layout, counter digits, and the bit-scan order.

use chrono::{DateTime, TimeZone, Utc};

use hashcash_core::{build_prefix, StampFormat};

/// A prefix test vector.
#[derive(Debug, Clone)]
pub struct PrefixVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub resource: &'static str,
    pub denomination: u32,
    /// Date as (year, month, day).
    pub date: (i32, u32, u32),
    pub format: StampFormat,
    /// Expected prefix text.
    pub expected: &'static str,
}

impl PrefixVector {
    /// The vector's date at midnight UTC.
    pub fn date_time(&self) -> DateTime<Utc> {
        let (y, m, d) = self.date;
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
            .single()
            .unwrap_or_else(|| panic!("vector '{}' has an invalid date", self.name))
    }
}

/// Get all prefix vectors.
pub fn prefix_vectors() -> Vec<PrefixVector> {
    vec![
        PrefixVector {
            name: "version 0 email",
            resource: "foo@example.com",
            denomination: 20,
            date: (2024, 1, 1),
            format: StampFormat::Version0,
            expected: "0:240101:foo@example.com:",
        },
        PrefixVector {
            name: "version 1 email",
            resource: "foo@example.com",
            denomination: 20,
            date: (2024, 1, 1),
            format: StampFormat::Version1,
            expected: "1:20:240101:foo@example.com::",
        },
        PrefixVector {
            name: "version 1 single digit month and day",
            resource: "foo0123456789",
            denomination: 16,
            date: (2009, 3, 7),
            format: StampFormat::Version1,
            expected: "1:16:090307:foo0123456789::",
        },
        PrefixVector {
            name: "version 0 end of century",
            resource: "msg-id",
            denomination: 32,
            date: (1999, 12, 31),
            format: StampFormat::Version0,
            expected: "0:991231:msg-id:",
        },
        PrefixVector {
            name: "version 0 url resource",
            resource: "http://example.com/page",
            denomination: 16,
            date: (2030, 6, 15),
            format: StampFormat::Version0,
            expected: "0:300615:http://example.com/page:",
        },
    ]
}

/// Generate the prefix bytes for a vector.
pub fn generate_prefix_from_vector(vector: &PrefixVector) -> Vec<u8> {
    build_prefix(
        vector.resource,
        vector.denomination,
        &vector.date_time(),
        vector.format,
    )
}

/// A counter encoding vector.
#[derive(Debug, Clone)]
pub struct CounterVector {
    pub value: u64,
    /// Expected symbols, least-significant digit first.
    pub expected: &'static str,
}

/// Get all counter vectors.
pub fn counter_vectors() -> Vec<CounterVector> {
    vec![
        CounterVector { value: 0, expected: "" },
        CounterVector { value: 1, expected: "1" },
        CounterVector { value: 35, expected: "z" },
        CounterVector { value: 36, expected: "A" },
        CounterVector { value: 61, expected: "Z" },
        CounterVector { value: 62, expected: "+" },
        CounterVector { value: 63, expected: "/" },
        CounterVector { value: 64, expected: "=" },
        CounterVector { value: 65, expected: "01" },
        CounterVector { value: 66, expected: "11" },
        CounterVector { value: 4224, expected: "==" },
        CounterVector { value: 4225, expected: "001" },
        CounterVector { value: 92_944, expected: "X=l" },
        CounterVector { value: u64::MAX, expected: "fz2FfNMfFJd" },
    ]
}

/// A bit-scan vector: the leading bytes of a digest (rest `0xff`) and the
/// zero count the scan must report.
#[derive(Debug, Clone)]
pub struct BitScanVector {
    pub leading: &'static [u8],
    pub expected_zeros: u32,
}

/// Get all bit-scan vectors.
pub fn bit_scan_vectors() -> Vec<BitScanVector> {
    vec![
        BitScanVector { leading: &[0x01], expected_zeros: 0 },
        BitScanVector { leading: &[0x02], expected_zeros: 1 },
        BitScanVector { leading: &[0x80], expected_zeros: 7 },
        BitScanVector { leading: &[0xf0], expected_zeros: 4 },
        BitScanVector { leading: &[0x00, 0x01], expected_zeros: 8 },
        BitScanVector { leading: &[0x00, 0x00, 0x6b], expected_zeros: 16 },
        BitScanVector { leading: &[0x00, 0x00, 0x00, 0x80], expected_zeros: 31 },
        BitScanVector { leading: &[0x00, 0x00, 0x00, 0x00, 0x01], expected_zeros: 32 },
    ]
}

/// A stamp minted by an independent implementation of the same algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GoldenStamp {
    pub stamp: &'static str,
    /// SHA-1 of `stamp`, hex.
    pub digest: &'static str,
    /// Leading zero bits under the LSB-first scan.
    pub denomination: u32,
}

/// Golden stamps, both requested at 16 bits.
pub const GOLDEN_STAMPS: [GoldenStamp; 2] = [
    GoldenStamp {
        stamp: "0:240101:golden@example.com:OQwScxfanLIzNv0dcF8UXOsGsDjKQ=WQAelT",
        digest: "0000aa0372cfcb92e947e46eadeef934bef597da",
        denomination: 17,
    },
    GoldenStamp {
        stamp: "1:16:240101:golden@example.com::5BDE+NkJ+wympYxSlLCU4UspJdNf:X=l",
        digest: "0000f0e8183c550ed6d1ad6a927647e05137f0d8",
        denomination: 20,
    },
];
