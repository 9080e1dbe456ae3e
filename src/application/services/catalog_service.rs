//! Catalog Service
//!
//! CRUD over the service catalog.

use std::sync::Arc;

use crate::domain::{CatalogRepository, Category, Service, ServiceDraft, Subcategory};
use crate::shared::error::AppError;

/// Catalog errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Service not found")]
    ServiceNotFound,
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::ServiceNotFound => AppError::NotFound(e.to_string()),
        }
    }
}

/// Catalog operations used by the HTTP handlers.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.repo.categories()
    }

    /// Subcategories under `parent_id`; empty when the parent has none or is unknown.
    pub fn subcategories(&self, parent_id: &str) -> Vec<Subcategory> {
        self.repo.subcategories(parent_id)
    }

    pub fn list_services(&self) -> Vec<Service> {
        self.repo.list()
    }

    pub fn get_service(&self, id: &str) -> Result<Service, CatalogError> {
        self.repo.get(id).ok_or(CatalogError::ServiceNotFound)
    }

    pub fn create_service(&self, draft: ServiceDraft) -> Service {
        let service = self.repo.insert(draft);
        tracing::debug!(service_id = %service.id, "Service created");
        service
    }

    /// Full replace of the service under `id`. The id itself never changes.
    pub fn update_service(&self, id: &str, draft: ServiceDraft) -> Result<Service, CatalogError> {
        let service = self
            .repo
            .replace(id, draft)
            .ok_or(CatalogError::ServiceNotFound)?;
        tracing::debug!(service_id = %id, "Service updated");
        Ok(service)
    }

    /// Idempotent: deleting an unknown id succeeds without changing the catalog.
    pub fn delete_service(&self, id: &str) {
        let removed = self.repo.remove(id);
        tracing::debug!(service_id = %id, removed, "Service delete");
    }
}
