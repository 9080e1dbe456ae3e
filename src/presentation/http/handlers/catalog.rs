//! Service Catalog Handlers

use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::WithRejection;

use crate::application::dto::{DataResponse, MessageDataResponse, MessageResponse};
use crate::application::services::CatalogService;
use crate::domain::{Category, Service, ServiceDraft, Subcategory};
use crate::shared::error::AppError;
use crate::startup::AppState;

fn catalog(state: &AppState) -> CatalogService {
    CatalogService::new(state.catalog.clone())
}

/// List all categories
pub async fn get_categories(State(state): State<AppState>) -> Json<DataResponse<Vec<Category>>> {
    Json(DataResponse::new(catalog(&state).categories()))
}

/// List subcategories of a category
pub async fn get_subcategories(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Json<DataResponse<Vec<Subcategory>>> {
    Json(DataResponse::new(catalog(&state).subcategories(&parent_id)))
}

/// List all services
pub async fn get_services(State(state): State<AppState>) -> Json<DataResponse<Vec<Service>>> {
    Json(DataResponse::new(catalog(&state).list_services()))
}

/// Get a single service
pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Json<DataResponse<Service>>, AppError> {
    let service = catalog(&state).get_service(&service_id)?;
    Ok(Json(DataResponse::new(service)))
}

/// Create a service
pub async fn create_service(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<ServiceDraft>, AppError>,
) -> Json<MessageDataResponse<Service>> {
    let service = catalog(&state).create_service(body);
    Json(MessageDataResponse::new("Service created successfully", service))
}

/// Replace a service, keeping its id
pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<ServiceDraft>, AppError>,
) -> Result<Json<MessageDataResponse<Service>>, AppError> {
    let service = catalog(&state).update_service(&service_id, body)?;
    Ok(Json(MessageDataResponse::new("Service updated successfully", service)))
}

/// Delete a service. Unknown ids succeed as well.
pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Json<MessageResponse> {
    catalog(&state).delete_service(&service_id);
    Json(MessageResponse::new("Service deleted successfully"))
}
