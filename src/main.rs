//! `music-catalog` server binary.

use anyhow::Context as _;
use music_catalog::config::AppConfig;
use music_catalog::{server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(config.logging()).context("failed to initialise logging")?;

    server::run(config).await
}
