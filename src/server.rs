//! # Server
//!
//! Composition root and process lifecycle.
//!
//! [`compose_state`] wires seeded repositories into services, one
//! repository instance per entity type. [`run`] serves the router until
//! Ctrl-C or SIGTERM, then gives in-flight requests the configured drain
//! time before returning.

use crate::api::rest::{AppState, create_router};
use crate::application::services::{DefaultAlbumService, DefaultSingerService};
use crate::config::{AppConfig, ServerConfig};
use crate::infrastructure::persistence::in_memory::{
    InMemoryAlbumRepository, InMemorySingerRepository,
};
use anyhow::Context as _;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{info, warn};

/// Builds handler state over freshly seeded in-memory repositories.
#[must_use]
pub fn compose_state(config: &ServerConfig) -> AppState {
    let singer_repository = Arc::new(InMemorySingerRepository::seeded());
    let album_repository = Arc::new(InMemoryAlbumRepository::seeded());

    let singer_service = DefaultSingerService::new(singer_repository.clone());
    let album_service = DefaultAlbumService::new(album_repository, singer_repository);

    AppState::new(Arc::new(singer_service), Arc::new(album_service))
        .with_request_timeout(config.request_timeout())
}

/// Runs the HTTP server until a shutdown signal arrives.
///
/// # Errors
///
/// Fails if the listener cannot be bound or the server stops with an I/O
/// error.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let server_config = config.server();
    let address = server_config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(address = %listener.local_addr()?, "server start running");
    serve(listener, compose_state(server_config), server_config).await
}

/// Serves `state` on an already bound listener until a shutdown signal.
///
/// # Errors
///
/// Fails if the server stops with an I/O error.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    config: &ServerConfig,
) -> anyhow::Result<()> {
    serve_until(listener, state, config, shutdown_signal()).await
}

/// Serves `state` until `shutdown` resolves, then drains for at most the
/// configured shutdown timeout before aborting open connections.
///
/// # Errors
///
/// Fails if the server stops with an I/O error.
pub async fn serve_until<F>(
    listener: TcpListener,
    state: AppState,
    config: &ServerConfig,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);
    let signalled = Arc::new(Notify::new());

    let mut server = tokio::spawn({
        let signalled = Arc::clone(&signalled);
        async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown.await;
                    info!("shutdown requested, draining connections");
                    signalled.notify_one();
                })
                .await
        }
    });

    let drain_timeout = config.shutdown_timeout();
    tokio::select! {
        result = &mut server => {
            result.context("server task failed")??;
        }
        () = async {
            signalled.notified().await;
            tokio::time::sleep(drain_timeout).await;
        } => {
            warn!(timeout = ?drain_timeout, "graceful shutdown timed out, aborting");
            server.abort();
        }
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
