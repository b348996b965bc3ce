//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL record storage and lookup
//! - [`SequenceRepository`] - Atomic per-namespace sequence allocation

pub mod sequence_repository;
pub mod url_repository;

pub use sequence_repository::{SequenceRepository, URLS_NAMESPACE};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use sequence_repository::MockSequenceRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
