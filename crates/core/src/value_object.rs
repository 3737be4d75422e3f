//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own; two instances holding the same
/// attributes are interchangeable. Implementors are immutable once built, so
/// "changing" one means constructing a new value.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
