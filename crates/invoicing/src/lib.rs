//! Invoicing domain module.
//!
//! A customer's invoice: the ordered list of performances billed to them.
//! Pure data with construction-time validation (no IO, no storage).

pub mod invoice;

pub use invoice::{Invoice, Performance};
