//! # Hashcash Testkit
//!
//! Testing utilities for hashcash minting.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed prefixes, counter encodings, and bit-scan
//!   cases that every build must reproduce byte for byte
//! - **Generators**: Proptest strategies for resources, dates, and formats
//! - **Fixtures**: A cheap-to-mint configuration with a seeded random source
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hashcash_testkit::vectors::{prefix_vectors, generate_prefix_from_vector};
//!
//! for vector in prefix_vectors() {
//!     let prefix = generate_prefix_from_vector(&vector);
//!     assert_eq!(prefix, vector.expected.as_bytes());
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashcash_testkit::generators::MintParams;
//! use hashcash_testkit::fixtures::TestFixture;
//!
//! proptest! {
//!     #[test]
//!     fn minted_stamps_meet_denomination(params: MintParams) {
//!         let stamp = TestFixture::with_seed(1).mint(&params);
//!         prop_assert!(stamp.denomination() >= params.denomination);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::MintParams;
pub use vectors::{
    bit_scan_vectors, counter_vectors, generate_prefix_from_vector, prefix_vectors,
    BitScanVector, CounterVector, GoldenStamp, PrefixVector, GOLDEN_STAMPS,
};
