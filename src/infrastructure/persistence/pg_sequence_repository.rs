//! PostgreSQL implementation of the sequence allocator.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::SequenceRepository;
use crate::error::AppError;

/// PostgreSQL repository backing named sequences with the `counters` table.
///
/// Increments are a single `INSERT ... ON CONFLICT DO UPDATE ... RETURNING`
/// statement; the row lock taken by the upsert serializes concurrent callers.
pub struct PgSequenceRepository {
    pool: Arc<PgPool>,
}

impl PgSequenceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SequenceRepository for PgSequenceRepository {
    async fn ensure(&self, namespace: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO counters (id, seq)
            VALUES ($1, 0)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(namespace)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn next(&self, namespace: &str) -> Result<i64, AppError> {
        let seq: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO counters (id, seq)
            VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE SET seq = counters.seq + 1
            RETURNING seq
            "#,
        )
        .bind(namespace)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(seq)
    }

    async fn current(&self, namespace: &str) -> Result<Option<i64>, AppError> {
        let seq: Option<i64> = sqlx::query_scalar("SELECT seq FROM counters WHERE id = $1")
            .bind(namespace)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(seq)
    }
}
