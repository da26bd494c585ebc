//! # In-Memory Repositories
//!
//! Process-local implementations of the repository ports.
//!
//! ## Available Repositories
//!
//! - [`InMemorySingerRepository`]: Singer persistence
//! - [`InMemoryAlbumRepository`]: Album persistence
//!
//! ## Thread Safety
//!
//! All implementations use `Arc<RwLock<HashMap>>` for thread-safe access,
//! with one lock per repository instance.

pub mod repository;

pub use repository::{InMemoryAlbumRepository, InMemoryRepository, InMemorySingerRepository};
