//! Lookup Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{LookupRecord, LookupRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct LookupRow {
    id: i32,
    name: Option<String>,
}

/// PostgreSQL lookup repository implementation.
#[derive(Clone)]
pub struct PgLookupRepository {
    pool: PgPool,
}

impl PgLookupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LookupRepository for PgLookupRepository {
    async fn find_all(&self) -> Result<Vec<LookupRecord>, AppError> {
        let rows = sqlx::query_as::<_, LookupRow>("SELECT id, name FROM lookup_data ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        // `name` is nullable in the schema; surface missing names as empty strings.
        Ok(rows
            .into_iter()
            .map(|r| LookupRecord {
                id: r.id,
                name: r.name.unwrap_or_default(),
            })
            .collect())
    }
}
