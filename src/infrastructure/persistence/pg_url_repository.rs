//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL records.
///
/// Uses SQLx prepared statements for SQL injection protection. The
/// `urls_short_url_key` unique constraint turns a colliding insert into
/// [`AppError::DuplicateKey`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE original_url = $1
            ORDER BY short_url ASC
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn find_by_short_code(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, created_at
            "#,
        )
        .bind(new_record.original_url)
        .bind(new_record.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
