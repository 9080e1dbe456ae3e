//! # Catalog Server
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and tables
//! - HTTP server

use anyhow::Result;
use tracing::info;

use catalog_server::config::Settings;
use catalog_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    catalog_server::telemetry::init_tracing();

    info!("Starting Catalog Server...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
