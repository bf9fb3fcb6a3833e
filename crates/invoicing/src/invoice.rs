use serde::{Deserialize, Serialize};

use theater_core::{DomainError, DomainResult, PlayId, ValueObject};

/// One billed performance of a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PerformanceRecord")]
pub struct Performance {
    #[serde(rename = "playID")]
    play_id: PlayId,
    audience: u32,
}

/// Unvalidated wire shape of a [`Performance`].
#[derive(Deserialize)]
struct PerformanceRecord {
    #[serde(rename = "playID")]
    play_id: PlayId,
    audience: u32,
}

impl TryFrom<PerformanceRecord> for Performance {
    type Error = DomainError;

    fn try_from(record: PerformanceRecord) -> Result<Self, Self::Error> {
        Performance::new(record.play_id, record.audience)
    }
}

impl Performance {
    /// Invariant: audience must be positive.
    pub fn new(play_id: PlayId, audience: u32) -> DomainResult<Self> {
        if audience == 0 {
            return Err(DomainError::validation(format!(
                "performance of {play_id} must have a positive audience"
            )));
        }
        Ok(Self { play_id, audience })
    }

    pub fn play_id(&self) -> &PlayId {
        &self.play_id
    }

    pub fn audience(&self) -> u32 {
        self.audience
    }
}

impl ValueObject for Performance {}

/// A customer's invoice. Performance order is the line order of the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InvoiceRecord")]
pub struct Invoice {
    customer: String,
    performances: Vec<Performance>,
}

#[derive(Deserialize)]
struct InvoiceRecord {
    customer: String,
    #[serde(default)]
    performances: Vec<Performance>,
}

impl TryFrom<InvoiceRecord> for Invoice {
    type Error = DomainError;

    fn try_from(record: InvoiceRecord) -> Result<Self, Self::Error> {
        Invoice::new(record.customer, record.performances)
    }
}

impl Invoice {
    /// Invariant: the customer name is not blank. An invoice may have no
    /// performances.
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> DomainResult<Self> {
        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(DomainError::validation("invoice customer must not be empty"));
        }
        Ok(Self {
            customer,
            performances,
        })
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn performances(&self) -> &[Performance] {
        &self.performances
    }

    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }
}

impl ValueObject for Invoice {}

#[cfg(test)]
mod tests {
    use super::*;

    fn hamlet() -> PlayId {
        PlayId::from_static("hamlet")
    }

    #[test]
    fn performance_requires_positive_audience() {
        let err = Performance::new(hamlet(), 0).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("positive audience") => {}
            _ => panic!("Expected Validation for zero audience"),
        }

        let performance = Performance::new(hamlet(), 55).unwrap();
        assert_eq!(performance.play_id(), &hamlet());
        assert_eq!(performance.audience(), 55);
    }

    #[test]
    fn invoice_requires_customer() {
        let err = Invoice::new("  ", Vec::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn invoice_keeps_performance_order() {
        let performances = vec![
            Performance::new(PlayId::from_static("othello"), 40).unwrap(),
            Performance::new(hamlet(), 55).unwrap(),
        ];
        let invoice = Invoice::new("BigCo", performances.clone()).unwrap();

        assert_eq!(invoice.customer(), "BigCo");
        assert_eq!(invoice.performances(), performances.as_slice());
        assert!(!invoice.is_empty());
    }

    #[test]
    fn deserializes_invoice_json() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "customer": "BigCo",
                "performances": [
                    {"playID": "hamlet", "audience": 55},
                    {"playID": "as-like", "audience": 35}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(invoice.performances().len(), 2);
        assert_eq!(invoice.performances()[1].play_id().as_str(), "as-like");
    }

    #[test]
    fn deserialization_enforces_invariants() {
        let zero_audience = r#"{"customer":"BigCo","performances":[{"playID":"hamlet","audience":0}]}"#;
        assert!(serde_json::from_str::<Invoice>(zero_audience).is_err());

        let blank_customer = r#"{"customer":"","performances":[]}"#;
        assert!(serde_json::from_str::<Invoice>(blank_customer).is_err());

        let negative = r#"{"customer":"BigCo","performances":[{"playID":"hamlet","audience":-3}]}"#;
        assert!(serde_json::from_str::<Invoice>(negative).is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a loaded invoice is accepted exactly when every
            /// performance has a positive audience.
            #[test]
            fn loader_rejects_zero_audience(
                seats in prop::collection::vec(0u32..50, 0..12)
            ) {
                let performances: Vec<String> = seats
                    .iter()
                    .enumerate()
                    .map(|(i, audience)| {
                        format!(r#"{{"playID":"play-{i}","audience":{audience}}}"#)
                    })
                    .collect();
                let json = format!(
                    r#"{{"customer":"BigCo","performances":[{}]}}"#,
                    performances.join(",")
                );

                let loaded = serde_json::from_str::<Invoice>(&json);
                let all_positive = seats.iter().all(|audience| *audience > 0);
                prop_assert_eq!(loaded.is_ok(), all_positive);

                if let Ok(invoice) = loaded {
                    let audiences: Vec<u32> =
                        invoice.performances().iter().map(Performance::audience).collect();
                    prop_assert_eq!(audiences, seats);
                }
            }
        }
    }
}
