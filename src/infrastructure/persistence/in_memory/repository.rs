//! # In-Memory Repository
//!
//! Generic in-memory implementation of [`Repository`].
//!
//! Storage is a `HashMap` behind a single `tokio::sync::RwLock` owned by
//! the instance. Reads share the lock; `add` and `delete` take it
//! exclusively. Values are cloned in and out, so nothing handed to a
//! caller aliases the stored map.

use crate::context::RequestContext;
use crate::domain::entities::{Album, Entity, Singer, bootstrap_albums, bootstrap_singers};
use crate::infrastructure::persistence::traits::{Repository, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`Repository`] for any [`Entity`].
///
/// Cloning shares the underlying storage.
#[derive(Clone)]
pub struct InMemoryRepository<E: Entity> {
    storage: Arc<RwLock<HashMap<E::Id, E>>>,
}

/// In-memory singer repository.
pub type InMemorySingerRepository = InMemoryRepository<Singer>;

/// In-memory album repository.
pub type InMemoryAlbumRepository = InMemoryRepository<Album>;

impl<E: Entity> InMemoryRepository<E> {
    /// Creates a new empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a repository holding the given entities, keyed by their ids.
    ///
    /// Later entries win when two entities share an id.
    #[must_use]
    pub fn with_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let map = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        Self {
            storage: Arc::new(RwLock::new(map)),
        }
    }

    /// Returns the number of entities in the repository.
    ///
    /// Reports 0 while a writer holds the lock.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all entities from the repository.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl InMemorySingerRepository {
    /// Creates a singer repository loaded with the bootstrap singers.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_entities(bootstrap_singers())
    }
}

impl InMemoryAlbumRepository {
    /// Creates an album repository loaded with the bootstrap albums.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_entities(bootstrap_albums())
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> fmt::Debug for InMemoryRepository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryRepository")
            .field("entity_type", &E::ENTITY_TYPE)
            .field("len", &self.len())
            .finish()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn get_all(&self, _ctx: &RequestContext) -> RepositoryResult<Vec<E>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn get(&self, _ctx: &RequestContext, id: E::Id) -> RepositoryResult<E> {
        let storage = self.storage.read().await;
        storage
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(E::ENTITY_TYPE, id))
    }

    async fn add(&self, _ctx: &RequestContext, entity: &E) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        storage.insert(entity.id(), entity.clone());
        Ok(())
    }

    async fn delete(&self, _ctx: &RequestContext, id: E::Id) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(&id).is_some())
    }
}
