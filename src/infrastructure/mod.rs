//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and hostname resolution.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution (system resolver)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod dns;
pub mod persistence;
