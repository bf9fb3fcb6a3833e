//! Per-genre amount owed for a single performance, in cents.

use theater_core::{DomainError, DomainResult};
use theater_plays::Genre;

use crate::config::PricingConfig;

/// Amount owed for a performance of `genre` in front of `audience` seats.
///
/// - tragedy: base amount, plus a per-seat surcharge for every seat above the
///   tragedy threshold.
/// - comedy: base amount, plus a flat over-capacity fee and a per-seat
///   surcharge above the comedy threshold, plus a per-seat amount on every
///   seat.
pub fn amount_for(genre: Genre, audience: u32, config: &PricingConfig) -> DomainResult<u64> {
    match genre {
        Genre::Tragedy => tragedy_amount(audience, config),
        Genre::Comedy => comedy_amount(audience, config),
    }
}

/// Like [`amount_for`], resolving a raw genre string first.
///
/// Fails with `UnknownPlayType` for genres outside [`Genre`].
pub fn amount_for_type(genre: &str, audience: u32, config: &PricingConfig) -> DomainResult<u64> {
    amount_for(genre.parse()?, audience, config)
}

fn tragedy_amount(audience: u32, config: &PricingConfig) -> DomainResult<u64> {
    let mut amount = config.tragedy_base_amount;
    if audience > config.tragedy_audience_threshold {
        let extra_seats = u64::from(audience - config.tragedy_audience_threshold);
        let surcharge = overflow_checked(config.extra_tragedy_amount.checked_mul(extra_seats))?;
        amount = overflow_checked(amount.checked_add(surcharge))?;
    }
    Ok(amount)
}

fn comedy_amount(audience: u32, config: &PricingConfig) -> DomainResult<u64> {
    let mut amount = config.comedy_base_amount;
    if audience > config.comedy_audience_threshold {
        let extra_seats = u64::from(audience - config.comedy_audience_threshold);
        let per_person = overflow_checked(
            config
                .comedy_over_base_capacity_per_person
                .checked_mul(extra_seats),
        )?;
        let surcharge =
            overflow_checked(config.comedy_over_base_capacity_amount.checked_add(per_person))?;
        amount = overflow_checked(amount.checked_add(surcharge))?;
    }
    let per_audience =
        overflow_checked(config.comedy_amount_per_audience.checked_mul(u64::from(audience)))?;
    overflow_checked(amount.checked_add(per_audience))
}

fn overflow_checked(value: Option<u64>) -> DomainResult<u64> {
    value.ok_or_else(|| DomainError::invariant("performance amount overflow"))
}
