//! # Bootstrap Dataset
//!
//! The fixed data every fresh process starts with.

use crate::domain::entities::{Album, Singer};
use crate::domain::value_objects::{AlbumId, SingerId};

/// Returns the five bootstrap singers, ids 1 through 5.
#[must_use]
pub fn bootstrap_singers() -> Vec<Singer> {
    ["Alice", "Bella", "Chris", "Daisy", "Ellen"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Singer::new(SingerId::new(id), name))
        .collect()
}

/// Returns the three bootstrap albums, owned by singers 1 and 2.
#[must_use]
pub fn bootstrap_albums() -> Vec<Album> {
    vec![
        Album::new(AlbumId::new(1), "Alice's 1st Album", SingerId::new(1)),
        Album::new(AlbumId::new(2), "Alice's 2nd Album", SingerId::new(1)),
        Album::new(AlbumId::new(3), "Bella's 1st Album", SingerId::new(2)),
    ]
}
