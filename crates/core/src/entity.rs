//! Entity trait: identity + continuity across state changes.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Entity marker + minimal interface.
///
/// An entity owns a value-object identifier that is set exactly once, at
/// construction. Implementors keep the id field private and expose it only
/// through [`Entity::id`], so there is no way to overwrite it in place.
///
/// Equality and hashing of implementors must be based on the id alone;
/// descriptive fields are excluded.
pub trait Entity {
    /// Value object used as this entity's identifier.
    type Id: ValueObject + core::fmt::Display;

    /// Stable name of the concrete entity variant.
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity key (variant + id) for mixing entity variants in one collection.
    fn key(&self) -> EntityKey {
        EntityKey {
            kind: Self::KIND,
            id: self.id().to_string(),
        }
    }

    /// Attempt to reassign the identifier.
    ///
    /// Always fails, whether or not `new_id` differs from the current id.
    fn reassign_id(&mut self, new_id: Self::Id) -> DomainResult<()> {
        tracing::warn!(
            entity = Self::KIND,
            id = %self.id(),
            attempted = %new_id,
            "rejected entity id reassignment"
        );
        Err(DomainError::immutable_identity(format!(
            "cannot change the id of {} {}",
            Self::KIND,
            self.id()
        )))
    }
}

/// Variant-tagged identity of an entity.
///
/// Two keys are equal only when both the entity variant and the rendered id
/// match, so entities of different variants never collide even when their ids
/// look the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EntityKey {
    pub kind: &'static str,
    pub id: String,
}

impl core::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
