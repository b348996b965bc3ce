//! Host resolver trait.

use async_trait::async_trait;
use std::net::SocketAddr;

/// Trait for resolving hostnames to socket addresses.
///
/// Implementations must be thread-safe; one resolver is shared by every
/// request. A successful lookup must return at least one address.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - `getaddrinfo` through tokio
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to one or more addresses.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the name does not resolve (NXDOMAIN,
    /// resolver timeout, no addresses).
    async fn lookup(&self, host: &str) -> std::io::Result<Vec<SocketAddr>>;
}
