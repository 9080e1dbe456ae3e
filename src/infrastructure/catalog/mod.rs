//! In-Memory Catalog
//!
//! Process-local implementation of `CatalogRepository`. Categories and
//! subcategories are immutable after construction; the service list sits
//! behind a `RwLock` so every mutation is a single serialized write.

mod fixtures;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{CatalogRepository, Category, Service, ServiceDraft, Subcategory};

pub use fixtures::{fixture_categories, fixture_services, fixture_subcategories};

/// Service catalog held in process memory.
pub struct InMemoryCatalogRepository {
    categories: Vec<Category>,
    subcategories: Vec<Subcategory>,
    services: RwLock<Vec<Service>>,
}

impl InMemoryCatalogRepository {
    /// Create a catalog from explicit records.
    pub fn new(
        categories: Vec<Category>,
        subcategories: Vec<Subcategory>,
        services: Vec<Service>,
    ) -> Self {
        Self {
            categories,
            subcategories,
            services: RwLock::new(services),
        }
    }

    /// Create a catalog seeded with the startup fixtures.
    pub fn seeded() -> Self {
        Self::new(
            fixture_categories(),
            fixture_subcategories(),
            fixture_services(),
        )
    }

    /// Number of services currently stored.
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CatalogRepository for InMemoryCatalogRepository {
    fn categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn subcategories(&self, parent_id: &str) -> Vec<Subcategory> {
        self.subcategories
            .iter()
            .filter(|s| s.parent_id == parent_id)
            .cloned()
            .collect()
    }

    fn list(&self) -> Vec<Service> {
        self.services.read().clone()
    }

    fn get(&self, id: &str) -> Option<Service> {
        self.services.read().iter().find(|s| s.id == id).cloned()
    }

    fn insert(&self, draft: ServiceDraft) -> Service {
        let service = Service::from_draft(Uuid::new_v4().to_string(), draft);
        self.services.write().push(service.clone());
        service
    }

    fn replace(&self, id: &str, draft: ServiceDraft) -> Option<Service> {
        let mut services = self.services.write();
        let slot = services.iter_mut().find(|s| s.id == id)?;
        *slot = Service::from_draft(id, draft);
        Some(slot.clone())
    }

    fn remove(&self, id: &str) -> usize {
        let mut services = self.services.write();
        let before = services.len();
        services.retain(|s| s.id != id);
        before - services.len()
    }
}
