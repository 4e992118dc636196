//! Test fixtures and helpers.
//!
//! Common setup code for minting tests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;

use hashcash::{MintConfig, Minter, Stamp};

use crate::generators::{MintParams, CHEAP_DENOMINATIONS};

/// A minter configured for cheap denominations, with a seeded random source.
pub struct TestFixture {
    pub minter: Minter,
    rng: RefCell<StdRng>,
}

impl TestFixture {
    /// Create with a random-seeded source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create with a deterministic random source.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let minter = Minter::new(cheap_config())
            .unwrap_or_else(|e| panic!("cheap test config rejected: {e}"));
        Self {
            minter,
            rng: RefCell::new(rng),
        }
    }

    /// Mint with the fixture's random source, panicking on validation errors.
    pub fn mint(&self, params: &MintParams) -> Stamp {
        let mut rng = self.rng.borrow_mut();
        self.minter
            .mint_with_rng(&params.request(), &mut *rng)
            .unwrap_or_else(|e| panic!("mint failed for {params:?}: {e}"))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A configuration accepting only the cheap denomination range.
pub fn cheap_config() -> MintConfig {
    MintConfig {
        default_denomination: *CHEAP_DENOMINATIONS.end(),
        minimum_denomination: *CHEAP_DENOMINATIONS.start(),
        maximum_denomination: *CHEAP_DENOMINATIONS.end(),
        ..MintConfig::default()
    }
}
