//! Repository trait for named monotonic sequences.

use crate::error::AppError;
use async_trait::async_trait;

/// Namespace of the sequence that hands out short codes.
pub const URLS_NAMESPACE: &str = "urls";

/// Repository interface for the sequence allocator.
///
/// Each namespace owns one counter that starts at 0 and only ever grows.
/// Implementations must increment and fetch in a single atomic store
/// operation so no two callers can observe the same value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceRepository: Send + Sync {
    /// Creates the counter for `namespace` at 0 if it does not exist yet.
    ///
    /// Returns `true` when a new counter was created, `false` if one was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn ensure(&self, namespace: &str) -> Result<bool, AppError>;

    /// Atomically increments the counter and returns the new value.
    ///
    /// A missing counter is created on the fly, so the first call yields 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors. A failed
    /// call has not consumed a value.
    async fn next(&self, namespace: &str) -> Result<i64, AppError>;

    /// Reads the current value without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn current(&self, namespace: &str) -> Result<Option<i64>, AppError>;
}
