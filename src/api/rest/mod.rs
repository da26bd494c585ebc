//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Singers
//! - `GET /singers` - List all singers
//! - `GET /singers/{id}` - Get singer by ID
//! - `POST /singers` - Create or replace a singer
//! - `DELETE /singers/{id}` - Delete a singer
//!
//! ## Albums
//! - `GET /albums` - List all albums
//! - `GET /albums/{id}` - Get album by ID
//! - `POST /albums` - Create or replace an album
//! - `DELETE /albums/{id}` - Delete an album
//!
//! ## Health
//! - `GET /health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use music_catalog::api::rest::create_router;
//! use music_catalog::server::compose_state;
//!
//! let router = create_router(compose_state(config.server()));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8888").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use handlers::{AppState, DEFAULT_REQUEST_TIMEOUT, HealthResponse};
pub use routes::create_router;
