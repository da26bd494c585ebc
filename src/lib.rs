//! # Music Catalog
//!
//! A layered CRUD service for singers and the albums they own.
//!
//! ## Layers
//!
//! - [`domain`]: Value types and the bootstrap dataset
//! - [`infrastructure`]: Repository ports and their in-memory implementation
//! - [`application`]: Services that mediate between transport and storage
//! - [`api`]: axum REST handlers and error mapping
//!
//! [`server`] is the composition root: it wires one repository per entity
//! type into the services and serves the router.
//!
//! # Examples
//!
//! ```ignore
//! use music_catalog::api::rest::create_router;
//! use music_catalog::config::AppConfig;
//! use music_catalog::server::compose_state;
//!
//! let config = AppConfig::load()?;
//! let router = create_router(compose_state(config.server()));
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod context;
pub mod domain;
pub mod infrastructure;
pub mod server;
pub mod telemetry;
