//! Lookup Handlers

use axum::{extract::State, Json};

use crate::domain::LookupRecord;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Return all lookup rows
pub async fn get_lookup_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<LookupRecord>>, AppError> {
    Ok(Json(state.lookups.find_all().await?))
}
