//! Operating-system resolver implementation.

use super::service::HostResolver;
use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use tracing::debug;

/// Resolver that delegates to the platform's `getaddrinfo`.
///
/// Lookups run on tokio's blocking pool. No timeout is applied beyond the
/// one configured for the system resolver itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a new SystemResolver instance.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<SocketAddr>> {
        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, 0)).await?.collect();

        if addrs.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses found for {host}"),
            ));
        }

        debug!(host, count = addrs.len(), "Resolved host");
        Ok(addrs)
    }
}
