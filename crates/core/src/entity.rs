//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Account records are entities: two records with the same card id are the
/// same account, whatever their balance or lock state.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
