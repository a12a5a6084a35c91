//! Domain Layer - Core Entity Trait
//!
//! Every backend record has a numeric identifier assigned by the server.

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Remove the entity with `id` from `list`. Returns whether anything was removed.
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: T::Id) -> bool {
    let before = list.len();
    list.retain(|entity| entity.id() != id);
    list.len() != before
}
