//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: a `Play`, a
/// `Performance` or an `Invoice` is fully described by its fields. To "modify"
/// one, build a new value.
///
/// The trait requires:
/// - **Clone**: values are copied, not shared by reference
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: helpful for logging and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
