//! Service catalog entities and repository trait.
//!
//! Catalog records live only in process memory. Categories and subcategories are
//! fixed fixtures; services are created, replaced and removed through the API.

use serde::{Deserialize, Serialize};

/// Top-level catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub level_data: String,
}

/// Second-level category pointing at its parent category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub parent_id: String,
    pub level_data: String,
}

/// One labelled step of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStep {
    pub id: String,
    pub label_no: i64,
    pub label_name: String,
    pub label_details: String,
}

/// A catalog service record.
///
/// `category_id` and `sub_category_id` are free-form references; nothing ties
/// them to existing categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Server-assigned identifier (UUID v4 string)
    pub id: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub version: String,
    #[serde(rename = "service")]
    pub name: String,
    pub service_list: Vec<ServiceStep>,
}

/// Client-supplied service fields. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub category_id: String,
    pub sub_category_id: String,
    pub version: String,
    #[serde(rename = "service")]
    pub name: String,
    pub service_list: Vec<ServiceStep>,
}

impl Service {
    /// Build a record from a draft under the given id.
    pub fn from_draft(id: impl Into<String>, draft: ServiceDraft) -> Self {
        Self {
            id: id.into(),
            category_id: draft.category_id,
            sub_category_id: draft.sub_category_id,
            version: draft.version,
            name: draft.name,
            service_list: draft.service_list,
        }
    }
}

/// Access to the service catalog.
///
/// Every method is a single atomic operation against the store.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// All categories in fixture order.
    fn categories(&self) -> Vec<Category>;

    /// Subcategories whose parent is `parent_id`.
    fn subcategories(&self, parent_id: &str) -> Vec<Subcategory>;

    /// All services in insertion order.
    fn list(&self) -> Vec<Service>;

    /// First service with the given id.
    fn get(&self, id: &str) -> Option<Service>;

    /// Assign a fresh id to the draft and append it.
    fn insert(&self, draft: ServiceDraft) -> Service;

    /// Replace the service with the given id in place, keeping the id.
    /// Returns `None` when no service matches.
    fn replace(&self, id: &str, draft: ServiceDraft) -> Option<Service>;

    /// Remove every service with the given id and return how many were removed.
    fn remove(&self, id: &str) -> usize;
}
