//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::Settings;
use crate::domain::{CatalogRepository, FileRepository, LookupRepository, UserRepository};
use crate::infrastructure::catalog::InMemoryCatalogRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgFileRepository, PgLookupRepository, PgUserRepository};
use crate::infrastructure::storage::LocalFileStorage;
use crate::presentation::http::routes;
use crate::presentation::middleware::{create_cors_layer, create_trace_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub lookups: Arc<dyn LookupRepository>,
    pub users: Arc<dyn UserRepository>,
    pub files: Arc<dyn FileRepository>,
    pub storage: Arc<LocalFileStorage>,
    pub settings: Arc<Settings>,
}

/// Build the full HTTP application (routes plus middleware) for a state.
pub fn build_router(state: AppState) -> Router {
    let cors = create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(CompressionLayer::new())
        .layer(create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let db = database::create_pool(&settings.database)
            .await
            .context("Failed to connect to the database")?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&db)
            .await
            .context("Failed to create database tables")?;
        tracing::info!("Database tables ready");

        let storage = LocalFileStorage::new(&settings.uploads.dir);
        storage.ensure_root().await?;
        tracing::info!(dir = %storage.root().display(), "Upload directory ready");

        let catalog = InMemoryCatalogRepository::seeded();
        tracing::info!(services = catalog.len(), "Service catalog seeded");

        let state = AppState {
            catalog: Arc::new(catalog),
            lookups: Arc::new(PgLookupRepository::new(db.clone())),
            users: Arc::new(PgUserRepository::new(db.clone())),
            files: Arc::new(PgFileRepository::new(db)),
            storage: Arc::new(storage),
            settings: Arc::new(settings.clone()),
        };

        let router = build_router(state);

        let listener = TcpListener::bind(settings.server_addr())
            .await
            .with_context(|| format!("Failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
