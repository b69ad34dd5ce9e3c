//! Value object trait: equality by value, not identity.
//!
//! Value objects have no identity; they are defined entirely by their attribute
//! values. Constructors validate, so a value object that exists is a valid one.

/// Marker trait for value objects.
///
/// ## Value Object vs Registry Entry
///
/// - **Value Object**: no identity. Two prices of `1.5` are the same price.
/// - **Registry entry**: identified by its item name. Two items with equal
///   price and quantity are still distinct entries.
///
/// ## Immutability
///
/// A value object is never modified in place. To "change" one, construct a new
/// value through its validating constructor and replace the old one. Containers
/// such as `ItemRecord` expose setters that do exactly that, so the validation
/// rules apply on every write.
///
/// ## Design Constraints
///
/// - **Clone**: values are small and cheap to copy.
/// - **PartialEq**: values compare by their attributes. Floating-point values
///   only get `PartialEq`, not `Eq`.
/// - **Debug**: values show up in test assertions and log fields.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// // Equal by value, not identity
/// assert_eq!(Price(1.5), Price(1.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
