//! Volume credits earned by a single performance.

use theater_core::{DomainError, DomainResult};
use theater_plays::Genre;

use crate::config::PricingConfig;

/// Credits for a performance: one per seat above the base threshold, plus one
/// per `comedy_extra_volume_factor` seats (floor) for comedies.
///
/// Never negative. Fails only when the comedy factor is zero.
pub fn credits_for(genre: Genre, audience: u32, config: &PricingConfig) -> DomainResult<u64> {
    let mut credits = u64::from(audience.saturating_sub(config.base_volume_credit_threshold));

    if genre == Genre::Comedy {
        let bonus = audience
            .checked_div(config.comedy_extra_volume_factor)
            .ok_or_else(|| {
                DomainError::validation("comedy_extra_volume_factor must be positive")
            })?;
        credits += u64::from(bonus);
    }

    Ok(credits)
}

/// Like [`credits_for`], resolving a raw genre string first.
pub fn credits_for_type(genre: &str, audience: u32, config: &PricingConfig) -> DomainResult<u64> {
    credits_for(genre.parse()?, audience, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PricingConfig {
        PricingConfig::default()
    }

    #[test]
    fn no_credits_at_or_below_threshold_for_tragedy() {
        assert_eq!(credits_for(Genre::Tragedy, 30, &config()).unwrap(), 0);
        assert_eq!(credits_for(Genre::Tragedy, 12, &config()).unwrap(), 0);
    }

    #[test]
    fn tragedy_earns_seats_above_threshold() {
        assert_eq!(credits_for(Genre::Tragedy, 55, &config()).unwrap(), 25);
    }

    #[test]
    fn comedy_earns_floor_bonus() {
        // 5 above threshold + 35 / 5
        assert_eq!(credits_for(Genre::Comedy, 35, &config()).unwrap(), 12);
        // below threshold, 29 / 5 floors to 5
        assert_eq!(credits_for(Genre::Comedy, 29, &config()).unwrap(), 5);
    }

    #[test]
    fn zero_factor_is_a_validation_error() {
        let config = PricingConfig {
            comedy_extra_volume_factor: 0,
            ..PricingConfig::default()
        };
        assert!(matches!(
            credits_for(Genre::Comedy, 10, &config),
            Err(DomainError::Validation(_))
        ));
        // the factor only matters for comedies
        assert_eq!(credits_for(Genre::Tragedy, 40, &config).unwrap(), 10);
    }

    #[test]
    fn string_entry_point_rejects_unknown_genre() {
        assert!(matches!(
            credits_for_type("opera", 40, &config()),
            Err(DomainError::UnknownPlayType(genre)) if genre == "opera"
        ));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: comedy earns exactly `audience / factor` more than
            /// tragedy for the same seats.
            #[test]
            fn comedy_bonus_is_floor_division(
                audience in 1u32..1_000_000,
                threshold in 0u32..100,
                factor in 1u32..50
            ) {
                let config = PricingConfig {
                    base_volume_credit_threshold: threshold,
                    comedy_extra_volume_factor: factor,
                    ..PricingConfig::default()
                };
                let tragedy = credits_for(Genre::Tragedy, audience, &config).unwrap();
                let comedy = credits_for(Genre::Comedy, audience, &config).unwrap();

                prop_assert_eq!(tragedy, u64::from(audience.saturating_sub(threshold)));
                prop_assert_eq!(comedy - tragedy, u64::from(audience / factor));
            }
        }
    }
}
