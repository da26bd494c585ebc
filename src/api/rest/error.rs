//! # REST Errors
//!
//! Maps failures to HTTP outcomes.
//!
//! | Origin | Status |
//! |---|---|
//! | Malformed path identifier | 400 |
//! | Malformed request body | 400 |
//! | Service not found | 404 |
//! | Any other service error | 500 |
//!
//! Every failure renders as `{"message": "..."}` and is logged.

use crate::application::error::ApplicationError;
use crate::domain::value_objects::InvalidIdError;
use axum::Json;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub message: String,
}

/// A request failure, classified by where it happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The path identifier could not be parsed.
    #[error("invalid path param: {0}")]
    InvalidPathParam(String),

    /// The request body could not be decoded.
    #[error("invalid body param: {0}")]
    InvalidBody(String),

    /// The service call failed.
    #[error(transparent)]
    Service(#[from] ApplicationError),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPathParam(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Service(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InvalidIdError> for ApiError {
    fn from(err: InvalidIdError) -> Self {
        Self::InvalidPathParam(err.to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPathParam(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), %message, "request failed");
        } else {
            warn!(status = status.as_u16(), %message, "request rejected");
        }

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Result type for REST handlers.
pub type ApiResult<T> = Result<T, ApiError>;
