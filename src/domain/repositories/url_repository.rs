//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL records.
///
/// Records are looked up by original URL (de-duplication on create) and by
/// short code (resolution). There are no update or delete operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds the record for an original URL.
    ///
    /// If a concurrent race left several records for the same URL, the
    /// oldest one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlRecord>, AppError>;

    /// Finds the record assigned to a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn find_by_short_code(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateKey`] if the short code is already taken.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
