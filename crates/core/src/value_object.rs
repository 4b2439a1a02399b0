//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// Two `Money` amounts with the same cent count are the same value; there is
/// no identity to preserve. To "modify" a value object, construct a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
