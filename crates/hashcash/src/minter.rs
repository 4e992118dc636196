//! The Minter: configuration, requests, and the mint operation.
//!
//! Configuration is an immutable [`MintConfig`] handed to [`Minter::new`].
//! Per-call choices live on a [`MintRequest`]; anything a request leaves
//! unset falls back to the configuration defaults when the stamp is minted.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use hashcash_core::digest::DIGEST_BITS;
use hashcash_core::{
    build_prefix, find_collision, validate_denomination, validate_format, validate_resource,
    DenominationBounds, StampBuffer, StampFormat, MINIMUM_RANDOM_FLOOR,
};

use crate::error::{MintError, Result};
use crate::stamp::Stamp;

/// Configuration for a [`Minter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MintConfig {
    /// Denomination used when a request does not set one. Default 20.
    pub default_denomination: u32,
    /// Format used when a request does not set one. Default version 0.
    pub default_format: StampFormat,
    /// Lowest accepted denomination. Default 16.
    pub minimum_denomination: u32,
    /// Highest accepted denomination. Default 32.
    pub maximum_denomination: u32,
    /// Random suffix bytes guaranteed before padding. Default 16.
    pub minimum_random: usize,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            default_denomination: 20,
            default_format: StampFormat::Version0,
            minimum_denomination: 16,
            maximum_denomination: 32,
            minimum_random: 16,
        }
    }
}

impl MintConfig {
    /// The accepted denomination range.
    pub fn bounds(&self) -> DenominationBounds {
        DenominationBounds::new(self.minimum_denomination, self.maximum_denomination)
    }

    /// Check that the configuration can mint anything at all.
    pub fn validate(&self) -> Result<()> {
        if self.minimum_denomination == 0 {
            return Err(MintError::InvalidConfig(
                "minimum_denomination must be at least 1".into(),
            ));
        }
        if self.minimum_denomination > self.maximum_denomination {
            return Err(MintError::InvalidConfig(format!(
                "minimum_denomination {} exceeds maximum_denomination {}",
                self.minimum_denomination, self.maximum_denomination
            )));
        }
        if self.maximum_denomination > DIGEST_BITS {
            return Err(MintError::InvalidConfig(format!(
                "maximum_denomination {} exceeds the {DIGEST_BITS}-bit digest",
                self.maximum_denomination
            )));
        }
        if !self.bounds().contains(self.default_denomination) {
            return Err(MintError::InvalidConfig(format!(
                "default_denomination {} is outside {}..={}",
                self.default_denomination, self.minimum_denomination, self.maximum_denomination
            )));
        }
        if self.minimum_random < MINIMUM_RANDOM_FLOOR {
            return Err(MintError::InvalidConfig(format!(
                "minimum_random must be at least {MINIMUM_RANDOM_FLOOR}"
            )));
        }
        Ok(())
    }
}

/// What to mint.
///
/// Only the resource is required. Unset fields take the minter's defaults;
/// an unset date means "now" at mint time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintRequest {
    resource: String,
    denomination: Option<u32>,
    date: Option<DateTime<Utc>>,
    format_version: Option<u8>,
}

impl MintRequest {
    /// Start a request for `resource`.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            denomination: None,
            date: None,
            format_version: None,
        }
    }

    /// Set the required denomination.
    pub fn denomination(mut self, denomination: u32) -> Self {
        self.denomination = Some(denomination);
        self
    }

    /// Set the stamp date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the stamp format.
    pub fn format(mut self, format: StampFormat) -> Self {
        self.format_version = Some(format.version());
        self
    }

    /// Set the stamp format by raw version number.
    ///
    /// Unknown versions are rejected when the stamp is minted.
    pub fn format_version(mut self, version: u8) -> Self {
        self.format_version = Some(version);
        self
    }

    /// The resource being stamped.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

/// Mints hashcash stamps under a fixed configuration.
///
/// A `Minter` holds no mutable state, so one instance can be shared across
/// threads and used for concurrent mints.
#[derive(Debug, Clone, Default)]
pub struct Minter {
    config: MintConfig,
}

impl Minter {
    /// Create a minter, rejecting an inconsistent configuration.
    pub fn new(config: MintConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    /// Mint a stamp using the thread-local random source.
    ///
    /// Blocks until a qualifying stamp is found. There is no timeout.
    pub fn mint(&self, request: &MintRequest) -> Result<Stamp> {
        self.mint_with_rng(request, &mut rand::thread_rng())
    }

    /// Mint a stamp drawing positions and symbols from `rng`.
    pub fn mint_with_rng<R: Rng + ?Sized>(&self, request: &MintRequest, rng: &mut R) -> Result<Stamp> {
        let denomination = request
            .denomination
            .unwrap_or(self.config.default_denomination);

        validate_resource(&request.resource)?;
        validate_denomination(denomination, self.config.bounds())?;
        let format = validate_format(
            request
                .format_version
                .unwrap_or(self.config.default_format.version()),
        )?;

        let date = request.date.unwrap_or_else(Utc::now);
        let prefix = build_prefix(&request.resource, denomination, &date, format);
        let buffer = StampBuffer::new(&prefix, format, self.config.minimum_random);

        let outcome = find_collision(buffer, denomination, rng);

        info!(
            resource = %request.resource,
            %format,
            denomination,
            achieved = outcome.denomination,
            iterations = outcome.iterations,
            "minted stamp"
        );

        Ok(Stamp::new(
            outcome.to_ascii_string(),
            format,
            denomination,
            outcome.digest,
            outcome.iterations,
        ))
    }
}

/// Mint a stamp with the default configuration.
pub fn mint(request: &MintRequest) -> Result<Stamp> {
    Minter::default().mint(request)
}
