//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! [`Repository`] is written once over any [`Entity`] and instantiated per
//! entity type. Services hold repositories only as trait objects, so an
//! in-memory store and a database-backed one are interchangeable.
//!
//! # Available Repositories
//!
//! - [`SingerRepository`]: Persistence for [`Singer`] entities
//! - [`AlbumRepository`]: Persistence for [`Album`] entities
//!
//! # Examples
//!
//! ```ignore
//! use music_catalog::context::RequestContext;
//! use music_catalog::infrastructure::persistence::SingerRepository;
//!
//! async fn print_singers(repo: &dyn SingerRepository) {
//!     let singers = repo.get_all(&RequestContext::new()).await.unwrap();
//!     println!("Found {} singers", singers.len());
//! }
//! ```

use crate::context::RequestContext;
use crate::domain::entities::{Album, Entity, Singer};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
///
/// The in-memory repositories only ever produce [`RepositoryError::NotFound`].
/// The remaining variants are storage faults a real backing store reports.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Keyed storage for one entity type.
///
/// Entities are always stored under their own [`Entity::id`].
///
/// # Concurrency
///
/// Implementations must allow reads (`get_all`, `get`) to run alongside
/// each other, and must serialize writes (`add`, `delete`) against every
/// other call on the same instance. Distinct instances never contend.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync + fmt::Debug {
    /// Returns every stored entity in unspecified order.
    ///
    /// The result is an owned snapshot; later writes do not affect it.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the backing store fails.
    async fn get_all(&self, ctx: &RequestContext) -> RepositoryResult<Vec<E>>;

    /// Gets an entity by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entity has this id.
    async fn get(&self, ctx: &RequestContext, id: E::Id) -> RepositoryResult<E>;

    /// Stores an entity under its own id.
    ///
    /// If an entity with the same id already exists, it is replaced.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the backing store fails.
    async fn add(&self, ctx: &RequestContext, entity: &E) -> RepositoryResult<()>;

    /// Deletes an entity by ID.
    ///
    /// Returns `Ok(true)` if the entity was deleted, `Ok(false)` if it didn't
    /// exist. Deleting an absent id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage fault if the backing store fails.
    async fn delete(&self, ctx: &RequestContext, id: E::Id) -> RepositoryResult<bool>;
}

/// Repository for [`Singer`] entities.
pub trait SingerRepository: Repository<Singer> {}

impl<T: Repository<Singer>> SingerRepository for T {}

/// Repository for [`Album`] entities.
pub trait AlbumRepository: Repository<Album> {}

impl<T: Repository<Album>> AlbumRepository for T {}
