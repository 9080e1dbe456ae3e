//! File Metadata Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{FileRecord, FileRepository, NewFileRecord};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct FileRow {
    id: i32,
    file_name: String,
    file_path: String,
}

impl From<FileRow> for FileRecord {
    fn from(row: FileRow) -> Self {
        Self {
            id: row.id,
            file_name: row.file_name,
            file_path: row.file_path,
        }
    }
}

/// PostgreSQL file metadata repository implementation.
#[derive(Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn create(&self, record: &NewFileRecord) -> Result<FileRecord, AppError> {
        let row = sqlx::query_as::<_, FileRow>(
            r#"
            INSERT INTO file_data (file_name, file_path)
            VALUES ($1, $2)
            RETURNING id, file_name, file_path
            "#,
        )
        .bind(&record.file_name)
        .bind(&record.file_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
