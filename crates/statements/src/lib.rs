//! Statement engine: prices each performance on an invoice, awards volume
//! credits and renders the customer statement.
//!
//! Everything here is a pure function of its inputs (invoice, play lookup,
//! pricing config). Loading those inputs is the caller's job.

pub mod config;
pub mod credits;
pub mod currency;
pub mod pricing;
pub mod statement;

pub use config::PricingConfig;
pub use credits::{credits_for, credits_for_type};
pub use currency::usd;
pub use pricing::{amount_for, amount_for_type};
pub use statement::{render, render_with, Statement, StatementLine, StatementPrinter};
