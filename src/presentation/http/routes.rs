//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes(&state))
        // Liveness
        .route("/", get(handlers::health::root))
        .with_state(state)
}

/// API v1 routes
fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(lookup_routes())
        .merge(auth_routes())
        .merge(upload_routes(state.settings.uploads.max_file_size_bytes))
        .merge(catalog_routes())
}

/// Lookup routes (persisted, read-only)
fn lookup_routes() -> Router<AppState> {
    Router::new().route("/lookup/getLookupData", get(handlers::lookup::get_lookup_data))
}

/// Registration and the placeholder token check
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/auth/me", get(handlers::auth::current_user))
}

/// File upload routes with their own body limit
fn upload_routes(max_file_size_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/fileUpload", post(handlers::files::file_upload))
        .route("/upload", post(handlers::files::upload))
        .layer(DefaultBodyLimit::max(max_file_size_bytes))
}

/// In-memory service catalog routes
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::catalog::get_categories))
        .route(
            "/subcategories/{parent_id}",
            get(handlers::catalog::get_subcategories),
        )
        .route(
            "/services",
            get(handlers::catalog::get_services).post(handlers::catalog::create_service),
        )
        .route(
            "/services/{service_id}",
            get(handlers::catalog::get_service)
                .put(handlers::catalog::update_service)
                .delete(handlers::catalog::delete_service),
        )
}
