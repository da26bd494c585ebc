//! # Application Services
//!
//! Services that mediate between the transport layer and the repositories.
//!
//! - [`SingerService`]: Singer use cases
//! - [`AlbumService`]: Album use cases, including the album/owner join
//!
//! Services depend on repositories only through the persistence traits, so
//! the storage backend can change without touching this layer.

pub mod album_service;
pub mod singer_service;

pub use album_service::{AlbumService, DefaultAlbumService};
pub use singer_service::{DefaultSingerService, SingerService};
