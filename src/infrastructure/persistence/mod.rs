//! # Persistence Layer
//!
//! ## Repository Traits (Ports)
//!
//! - [`Repository`]: Generic keyed storage contract
//! - [`SingerRepository`]: Persistence for singers
//! - [`AlbumRepository`]: Persistence for albums
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations behind a per-instance lock

pub mod in_memory;
pub mod traits;

pub use traits::{
    AlbumRepository, Repository, RepositoryError, RepositoryResult, SingerRepository,
};
