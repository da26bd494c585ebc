//! # Telemetry
//!
//! Process-wide `tracing` subscriber setup.
//!
//! `RUST_LOG`, when set, takes precedence over the configured level.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Fails if the configured level is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.level())?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    match config.format() {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true),
            )
            .try_init()?,
    }
    Ok(())
}
