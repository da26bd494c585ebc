//! # Entity Trait
//!
//! Identity contract shared by all stored entities.

use std::fmt;
use std::hash::Hash;

/// A value stored and looked up by its own identifier.
///
/// Repositories always index an entity by [`Entity::id`], so the key of a
/// stored entry can never drift from the entity's id field.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Human-readable entity type name used in error messages.
    const ENTITY_TYPE: &'static str;

    /// Returns this entity's identifier.
    fn id(&self) -> Self::Id;
}
