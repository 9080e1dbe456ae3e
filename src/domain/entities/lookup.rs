//! Lookup entity and repository trait.
//!
//! Maps to the `lookup_data` table. Rows are seeded out of band and only read by the API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A persisted id/name pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRecord {
    pub id: i32,
    pub name: String,
}

/// Read-only access to lookup data.
#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// Return every lookup row ordered by id.
    async fn find_all(&self) -> Result<Vec<LookupRecord>, AppError>;
}
