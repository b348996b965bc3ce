//! Hostname resolution used as a URL validation gate.
//!
//! Provides a [`HostResolver`] trait with the production
//! [`SystemResolver`] implementation backed by the operating system resolver.

mod service;
mod system_resolver;

pub use service::HostResolver;
pub use system_resolver::SystemResolver;

#[cfg(test)]
pub use service::MockHostResolver;
