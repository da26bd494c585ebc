//! # Domain Entities
//!
//! - [`Singer`]: an identified, named performer
//! - [`Album`]: a titled collection owned by a singer through `singer_id`
//! - [`AlbumWithOwner`]: an album joined with its owning singer
//!
//! The [`Entity`] trait ties each entity to its identifier type so the
//! persistence layer can be written once for both.

pub mod album;
pub mod bootstrap;
pub mod entity;
pub mod singer;

pub use album::{Album, AlbumWithOwner};
pub use bootstrap::{bootstrap_albums, bootstrap_singers};
pub use entity::Entity;
pub use singer::Singer;
