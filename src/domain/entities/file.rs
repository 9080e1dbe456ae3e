//! File metadata entity and repository trait.
//!
//! Maps to the `file_data` table.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Metadata of a file written to local upload storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i32,

    /// Sanitized client-supplied name
    pub file_name: String,

    /// Path the file was stored at, relative to the working directory
    pub file_path: String,
}

/// A file record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRecord {
    pub file_name: String,
    pub file_path: String,
}

#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Persist upload metadata and return the stored row.
    async fn create(&self, record: &NewFileRecord) -> Result<FileRecord, AppError>;
}
