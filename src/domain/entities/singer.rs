//! # Singer Entity
//!
//! # Examples
//!
//! ```
//! use music_catalog::domain::entities::Singer;
//! use music_catalog::domain::value_objects::SingerId;
//!
//! let singer = Singer::new(SingerId::new(1), "Alice");
//! assert_eq!(singer.name, "Alice");
//! ```

use crate::domain::entities::Entity;
use crate::domain::value_objects::SingerId;
use serde::{Deserialize, Serialize};

/// A performer, serialized as `{"id": .., "name": ..}`.
///
/// Fields absent from a decoded document take their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Singer {
    /// Unique identifier.
    pub id: SingerId,
    /// Display name.
    pub name: String,
}

impl Singer {
    /// Creates a new singer.
    #[must_use]
    pub fn new(id: SingerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Singer {
    type Id = SingerId;

    const ENTITY_TYPE: &'static str = "Singer";

    fn id(&self) -> SingerId {
        self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let singer = Singer::new(SingerId::new(1), "Alice");
        let json = serde_json::to_value(&singer).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Alice"}));
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let singer: Singer =
            serde_json::from_str(r#"{"id": 9, "name": "Zoe", "genre": "jazz"}"#).unwrap();
        assert_eq!(singer, Singer::new(SingerId::new(9), "Zoe"));
    }

    #[test]
    fn decode_fills_missing_fields_with_zero_values() {
        let singer: Singer = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(singer, Singer::new(SingerId::new(9), ""));

        let singer: Singer = serde_json::from_str("{}").unwrap();
        assert_eq!(singer, Singer::default());
        assert_eq!(singer.id, SingerId::new(0));
    }

    #[test]
    fn decode_rejects_mistyped_fields() {
        assert!(serde_json::from_str::<Singer>(r#"{"id": "9", "name": "Zoe"}"#).is_err());
        assert!(serde_json::from_str::<Singer>(r#"{"id": 9, "name": 1}"#).is_err());
        assert!(serde_json::from_str::<Singer>("[]").is_err());
    }

    #[test]
    fn entity_id_is_field() {
        let singer = Singer::new(SingerId::new(3), "Chris");
        assert_eq!(Entity::id(&singer), SingerId::new(3));
        assert_eq!(Singer::ENTITY_TYPE, "Singer");
    }
}
