//! Server-rendered HTML pages.
//!
//! - [`handlers`] - Page handlers backed by askama templates
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
