//! # Hashcash
//!
//! Mint hashcash proof-of-work stamps: tokens that are cheap to check and
//! expensive to produce, used to make a sender burn compute before a
//! resource (an address, a URL, a message ID) is accepted.
//!
//! ## Overview
//!
//! A stamp is a human-readable prefix followed by a suffix found by random
//! search, such that the SHA-1 digest of the whole stamp starts with at
//! least `denomination` zero bits.
//!
//! - **Version 0**: `0:YYMMDD:<resource>:<random>`
//! - **Version 1**: `1:<bits>:YYMMDD:<resource>::<random>:<counter>`
//!
//! Stamp lengths are always a multiple of 64.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hashcash::{MintConfig, MintRequest, Minter, StampFormat};
//!
//! let minter = Minter::new(MintConfig::default()).unwrap();
//!
//! let request = MintRequest::new("foo@example.com")
//!     .denomination(20)
//!     .format(StampFormat::Version1);
//!
//! let stamp = minter.mint(&request).unwrap();
//! println!("{stamp}");
//! assert!(stamp.denomination() >= 20);
//! ```
//!
//! ## Re-exports
//!
//! - `hashcash::core` - Alphabet, prefix, padding, and search primitives

pub mod error;
pub mod minter;
pub mod stamp;

// Re-export component crate
pub use hashcash_core as core;

// Re-export main types for convenience
pub use error::{MintError, Result};
pub use minter::{mint, MintConfig, MintRequest, Minter};
pub use stamp::Stamp;

// Re-export commonly used core types
pub use hashcash_core::{
    stamp_denomination, StampDigest, StampFormat, ValidationError, MINIMUM_RANDOM_FLOOR,
};
