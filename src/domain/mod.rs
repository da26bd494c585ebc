//! # Domain Layer
//!
//! Plain value types for the catalog: identifiers, the two entities, and
//! the fixed bootstrap dataset.
//!
//! ## Modules
//!
//! - [`value_objects`]: Integer identifiers for singers and albums
//! - [`entities`]: [`Singer`](entities::Singer) and [`Album`](entities::Album)

pub mod entities;
pub mod value_objects;

pub use entities::{Album, AlbumWithOwner, Entity, Singer};
pub use value_objects::{AlbumId, SingerId};
