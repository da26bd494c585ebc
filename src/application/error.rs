//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Services do not translate repository failures: a repository error is
//! carried through transparently, so its message reaches the transport
//! layer unchanged.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Repository(RepositoryError) - Storage failures, including not found
//! └── Internal(String)            - Unexpected failures
//! ```
//!
//! # Examples
//!
//! ```
//! use music_catalog::application::error::ApplicationError;
//! use music_catalog::infrastructure::persistence::RepositoryError;
//!
//! let err: ApplicationError = RepositoryError::not_found("Singer", 999).into();
//! assert!(err.is_not_found());
//! assert_eq!(err.to_string(), "Entity not found: Singer with id 999");
//! ```

use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Repository error, passed through unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(e) if e.is_not_found())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
