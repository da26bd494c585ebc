//! # Identifiers
//!
//! Integer identifiers for catalog entities.
//!
//! Identifiers are assigned by the caller (the request body carries them),
//! so there is no generator here. Both types parse from decimal strings,
//! which is how the transport layer turns path segments into ids.
//!
//! # Examples
//!
//! ```
//! use music_catalog::domain::value_objects::SingerId;
//!
//! let id: SingerId = "42".parse().unwrap();
//! assert_eq!(id, SingerId::new(42));
//! assert_eq!(id.to_string(), "42");
//! assert!("abc".parse::<SingerId>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a valid identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{input}': {source}")]
pub struct InvalidIdError {
    kind: &'static str,
    input: String,
    #[source]
    source: ParseIntError,
}

impl InvalidIdError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from its raw value.
            #[inline]
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw integer value.
            #[inline]
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = InvalidIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self).map_err(|source| InvalidIdError {
                    kind: $kind,
                    input: s.to_string(),
                    source,
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Singer`](crate::domain::entities::Singer).
    SingerId,
    "singer id"
);

define_id!(
    /// Identifier of an [`Album`](crate::domain::entities::Album).
    AlbumId,
    "album id"
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal() {
        assert_eq!("7".parse::<SingerId>().unwrap().get(), 7);
        assert_eq!("-3".parse::<AlbumId>().unwrap().get(), -3);
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "abc".parse::<SingerId>().unwrap_err();
        assert_eq!(err.input(), "abc");
        assert!(err.to_string().contains("singer id"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn rejects_empty_and_overflow() {
        assert!("".parse::<AlbumId>().is_err());
        assert!("99999999999999999999".parse::<AlbumId>().is_err());
        assert!("1.5".parse::<AlbumId>().is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&SingerId::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: AlbumId = serde_json::from_str("12").unwrap();
        assert_eq!(id, AlbumId::new(12));
    }

    #[test]
    fn display_matches_raw_value() {
        assert_eq!(AlbumId::from(99).to_string(), "99");
        assert_eq!(i64::from(SingerId::new(4)), 4);
    }
}
