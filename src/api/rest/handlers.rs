//! # REST Handlers
//!
//! Each handler decodes its inputs, calls one service operation and
//! encodes the outcome. Path identifiers are parsed here, so a malformed id
//! is rejected before the service is reached.
//!
//! Request bodies are decoded from the raw bytes whatever the
//! `Content-Type` header says.

use crate::api::rest::error::ApiResult;
use crate::application::services::{AlbumService, SingerService};
use crate::context::RequestContext;
use crate::domain::entities::{Album, Singer};
use crate::domain::value_objects::{AlbumId, InvalidIdError, SingerId};
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    singers: Arc<dyn SingerService>,
    albums: Arc<dyn AlbumService>,
    request_timeout: Duration,
}

impl AppState {
    /// Creates handler state over the given services.
    #[must_use]
    pub fn new(singers: Arc<dyn SingerService>, albums: Arc<dyn AlbumService>) -> Self {
        Self {
            singers,
            albums,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Sets the deadline given to each request's context.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns the configured per-request deadline.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    fn context(&self) -> RequestContext {
        RequestContext::new().with_timeout(self.request_timeout)
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
}

fn parse_id<T>(path: Result<Path<String>, PathRejection>) -> ApiResult<T>
where
    T: FromStr<Err = InvalidIdError>,
{
    let Path(raw) = path?;
    Ok(raw.parse::<T>()?)
}

fn decode_body<T: DeserializeOwned>(payload: Result<Bytes, BytesRejection>) -> ApiResult<T> {
    let bytes = payload?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// `GET /singers`
pub async fn list_singers(State(state): State<AppState>) -> ApiResult<Json<Vec<Singer>>> {
    let ctx = state.context();
    Ok(Json(state.singers.list_singers(&ctx).await?))
}

/// `GET /singers/{id}`
pub async fn get_singer(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Singer>> {
    let id: SingerId = parse_id(path)?;
    let ctx = state.context();
    Ok(Json(state.singers.get_singer(&ctx, id).await?))
}

/// `POST /singers`
///
/// Echoes the stored singer back.
pub async fn create_singer(
    State(state): State<AppState>,
    payload: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Singer>> {
    let singer: Singer = decode_body(payload)?;
    let ctx = state.context();
    state.singers.add_singer(&ctx, &singer).await?;
    Ok(Json(singer))
}

/// `DELETE /singers/{id}`
pub async fn delete_singer(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id: SingerId = parse_id(path)?;
    let ctx = state.context();
    state.singers.delete_singer(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /albums`
pub async fn list_albums(State(state): State<AppState>) -> ApiResult<Json<Vec<Album>>> {
    let ctx = state.context();
    Ok(Json(state.albums.list_albums(&ctx).await?))
}

/// `GET /albums/{id}`
pub async fn get_album(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Album>> {
    let id: AlbumId = parse_id(path)?;
    let ctx = state.context();
    Ok(Json(state.albums.get_album(&ctx, id).await?))
}

/// `POST /albums`
///
/// Echoes the stored album back. The owner is not checked.
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<Album>> {
    let album: Album = decode_body(payload)?;
    let ctx = state.context();
    state.albums.add_album(&ctx, &album).await?;
    Ok(Json(album))
}

/// `DELETE /albums/{id}`
pub async fn delete_album(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id: AlbumId = parse_id(path)?;
    let ctx = state.context();
    state.albums.delete_album(&ctx, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
