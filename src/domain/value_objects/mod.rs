//! # Value Objects
//!
//! ## Identity Types
//!
//! - [`SingerId`], [`AlbumId`]: integer identifiers, serialized as bare
//!   JSON numbers

pub mod ids;

pub use ids::{AlbumId, InvalidIdError, SingerId};
