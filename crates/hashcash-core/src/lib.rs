//! # Hashcash Core
//!
//! Pure primitives for minting hashcash proof-of-work stamps.
//!
//! This crate contains no I/O and no configuration loading. It is pure
//! computation over a stamp buffer: build the prefix, pad it, then search
//! for a suffix whose SHA-1 digest carries enough leading zero bits.
//!
//! ## Key Types
//!
//! - [`StampFormat`] - Version 0 or version 1 wire layout
//! - [`StampBuffer`] - Padded, hash-block-aligned buffer being searched
//! - [`StampDigest`] - SHA-1 digest with the denomination bit-scan
//! - [`CounterDigits`] - Fixed-capacity alphabet-digit counter used by version 1
//!
//! ## Search
//!
//! [`find_collision`] is the hot loop. It mutates one suffix byte per
//! iteration and rehashes the whole buffer until the required denomination
//! is reached. See [`search`] module.

pub mod alphabet;
pub mod digest;
pub mod error;
pub mod format;
pub mod padding;
pub mod prefix;
pub mod search;
pub mod validation;

pub use alphabet::{random_symbol, symbol_index, CounterDigits, ALPHABET};
pub use digest::{stamp_denomination, StampDigest};
pub use error::ValidationError;
pub use format::StampFormat;
pub use padding::{padded_length, StampBuffer, HASH_BLOCK_LEN, MINIMUM_RANDOM_FLOOR};
pub use prefix::{build_prefix, format_date};
pub use search::{find_collision, SearchOutcome};
pub use validation::{
    validate_denomination, validate_format, validate_resource, DenominationBounds,
};
