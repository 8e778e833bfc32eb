//! Value object trait: equality by value, not identity.
//!
//! `Pin` and `Money` are value objects: two PINs with the same digits are the
//! same PIN, two amounts with the same minor units are the same amount.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one (e.g. `Money::checked_add` returns a fresh amount).
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable in logs and tests (redacted where the value is secret)
///
/// ```ignore
/// let a = Money::from_minor(100);
/// let b = Money::from_minor(100);
/// assert_eq!(a, b); // equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
