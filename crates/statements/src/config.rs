//! Pricing and volume-credit constants.

use serde::{Deserialize, Serialize};

use theater_core::{DomainError, DomainResult};

/// Every numeric constant the pricing and credit rules use.
///
/// `Default` carries the reference values. Amounts are in cents; thresholds
/// and factors are seat counts. When deserialized, missing fields fall back to
/// their defaults so a caller can override a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub tragedy_base_amount: u64,
    pub extra_tragedy_amount: u64,
    /// Seats included in the tragedy base price; also the subtrahend for the
    /// per-seat surcharge.
    pub tragedy_audience_threshold: u32,

    pub comedy_base_amount: u64,
    pub comedy_audience_threshold: u32,
    pub comedy_over_base_capacity_amount: u64,
    pub comedy_over_base_capacity_per_person: u64,
    pub comedy_amount_per_audience: u64,

    /// Seats that earn no credit, for every genre.
    pub base_volume_credit_threshold: u32,
    /// Comedies earn one extra credit per this many seats (floor).
    pub comedy_extra_volume_factor: u32,
}

impl PricingConfig {
    pub const TRAGEDY_BASE_AMOUNT: u64 = 40_000;
    pub const EXTRA_TRAGEDY_AMOUNT: u64 = 1_000;
    pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;
    pub const COMEDY_BASE_AMOUNT: u64 = 30_000;
    pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;
    pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: u64 = 10_000;
    pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: u64 = 500;
    pub const COMEDY_AMOUNT_PER_AUDIENCE: u64 = 300;
    pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;
    pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

    /// Reject constants the rules cannot evaluate.
    pub fn validate(&self) -> DomainResult<()> {
        if self.comedy_extra_volume_factor == 0 {
            return Err(DomainError::validation(
                "comedy_extra_volume_factor must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tragedy_base_amount: Self::TRAGEDY_BASE_AMOUNT,
            extra_tragedy_amount: Self::EXTRA_TRAGEDY_AMOUNT,
            tragedy_audience_threshold: Self::TRAGEDY_AUDIENCE_THRESHOLD,
            comedy_base_amount: Self::COMEDY_BASE_AMOUNT,
            comedy_audience_threshold: Self::COMEDY_AUDIENCE_THRESHOLD,
            comedy_over_base_capacity_amount: Self::COMEDY_OVER_BASE_CAPACITY_AMOUNT,
            comedy_over_base_capacity_per_person: Self::COMEDY_OVER_BASE_CAPACITY_PER_PERSON,
            comedy_amount_per_audience: Self::COMEDY_AMOUNT_PER_AUDIENCE,
            base_volume_credit_threshold: Self::BASE_VOLUME_CREDIT_THRESHOLD,
            comedy_extra_volume_factor: Self::COMEDY_EXTRA_VOLUME_FACTOR,
        }
    }
}
