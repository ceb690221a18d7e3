//! Ordered store of live composites keyed by id.
//!
//! Insertion order carries no meaning but is kept so that serialized scenes
//! are stable and diffable. Scenes hold a handful of objects, so lookups scan
//! the entry list.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use tracing::debug;

use crate::doc::{ObjectId, ObjectState};
use crate::error::SceneError;
use crate::factory::create_from_state;
use crate::shape::Composite;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Composite>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a composite from `state` via its factory and insert it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateId`] if the id is already present.
    pub fn create(&mut self, state: &ObjectState) -> Result<ObjectId, SceneError> {
        self.insert(create_from_state(state))
    }

    /// Insert an already built composite.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateId`] if the id is already present.
    pub fn insert(&mut self, composite: Composite) -> Result<ObjectId, SceneError> {
        if self.contains(composite.id()) {
            return Err(SceneError::DuplicateId(composite.id().clone()));
        }
        let id = composite.id().clone();
        debug!(%id, kind = %composite.kind(), "object registered");
        self.entries.push(composite);
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&Composite> {
        self.entries.iter().find(|c| c.id() == id)
    }

    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut Composite> {
        self.entries.iter_mut().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Remove an entry, returning it if it was present.
    pub fn delete(&mut self, id: &ObjectId) -> Option<Composite> {
        let index = self.entries.iter().position(|c| c.id() == id)?;
        debug!(%id, "object removed");
        Some(self.entries.remove(index))
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Composite> {
        self.entries.iter()
    }

    /// Every entry's current minimal state, in insertion order.
    #[must_use]
    pub fn serialize_all(&self) -> Vec<(ObjectId, ObjectState)> {
        self.entries.iter().map(|c| (c.id().clone(), c.state())).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
