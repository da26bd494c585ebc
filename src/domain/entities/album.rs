//! # Album Entity
//!
//! An album references its owning singer by id only. Nothing here checks
//! that the referenced singer exists.

use crate::domain::entities::{Entity, Singer};
use crate::domain::value_objects::{AlbumId, SingerId};
use serde::{Deserialize, Serialize};

/// A titled collection, serialized as `{"id": .., "title": .., "singer_id": ..}`.
///
/// Fields absent from a decoded document take their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    /// Unique identifier.
    pub id: AlbumId,
    /// Album title.
    pub title: String,
    /// Owning singer. Weak reference, not validated.
    pub singer_id: SingerId,
}

impl Album {
    /// Creates a new album.
    #[must_use]
    pub fn new(id: AlbumId, title: impl Into<String>, singer_id: SingerId) -> Self {
        Self {
            id,
            title: title.into(),
            singer_id,
        }
    }
}

impl Entity for Album {
    type Id = AlbumId;

    const ENTITY_TYPE: &'static str = "Album";

    fn id(&self) -> AlbumId {
        self.id
    }
}

/// An album joined with the singer that owns it.
///
/// Serializes as the album's own fields plus a nested `singer` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumWithOwner {
    /// The album.
    #[serde(flatten)]
    pub album: Album,
    /// The singer referenced by `album.singer_id`.
    #[serde(rename = "singer")]
    pub owner: Singer,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let album = Album::new(AlbumId::new(10), "Test", SingerId::new(1));
        let json = serde_json::to_value(&album).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 10, "title": "Test", "singer_id": 1})
        );
    }

    #[test]
    fn decodes_request_body() {
        let album: Album =
            serde_json::from_str(r#"{"id":10,"title":"Test","singer_id":1}"#).unwrap();
        assert_eq!(album, Album::new(AlbumId::new(10), "Test", SingerId::new(1)));
    }

    #[test]
    fn missing_owner_decodes_as_zero() {
        let album: Album = serde_json::from_str(r#"{"id":10,"title":"Test"}"#).unwrap();
        assert_eq!(album, Album::new(AlbumId::new(10), "Test", SingerId::new(0)));
    }

    #[test]
    fn mistyped_owner_is_rejected() {
        assert!(serde_json::from_str::<Album>(r#"{"id":10,"singer_id":"one"}"#).is_err());
    }

    #[test]
    fn enriched_json_nests_owner() {
        let enriched = AlbumWithOwner {
            album: Album::new(AlbumId::new(1), "Alice's 1st Album", SingerId::new(1)),
            owner: Singer::new(SingerId::new(1), "Alice"),
        };
        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Alice's 1st Album",
                "singer_id": 1,
                "singer": {"id": 1, "name": "Alice"}
            })
        );
    }
}
