//! Identity-based equality for entities.

/// Implements `PartialEq`, `Eq` and `Hash` for an entity from its `id` field
/// and entity kind only; descriptive fields do not participate.
macro_rules! impl_identity_equality {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(<$t as debtcheck_core::Entity>::KIND, state);
                core::hash::Hash::hash(&self.id, state);
            }
        }
    };
}
