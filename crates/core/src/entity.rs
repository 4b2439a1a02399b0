//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity keeps its identity while its attributes change: a product whose
/// price was edited is still the same product. Identifiers here are small
/// `Copy` newtypes, so `id` returns by value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
