//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! prepared statements.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL record storage and lookup
//! - [`PgSequenceRepository`] - Atomic counter increments

pub mod pg_sequence_repository;
pub mod pg_url_repository;

pub use pg_sequence_repository::PgSequenceRepository;
pub use pg_url_repository::PgUrlRepository;
