//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects defined entirely by their attribute
//! values: two with the same values are the same thing. They are immutable;
//! to "modify" one, build a new one. Cart lines, customers, and totals are
//! value objects here, while a `Product` is an entity (it has an id).

/// Marker trait for value objects.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
