//! # REST Routes
//!
//! Route table for the catalog API.

use crate::api::rest::handlers::{
    AppState, create_album, create_singer, delete_album, delete_singer, get_album, get_singer,
    health, list_albums, list_singers,
};
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Builds the router with all catalog endpoints.
///
/// Requests are logged through `tower-http`'s [`TraceLayer`].
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/singers", get(list_singers).post(create_singer))
        .route("/singers/{id}", get(get_singer).delete(delete_singer))
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/{id}", get(get_album).delete(delete_album))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
