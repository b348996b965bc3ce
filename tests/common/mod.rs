#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url_shortener::application::services::{ShortenService, UrlValidator};
use url_shortener::domain::entities::{NewUrlRecord, UrlRecord};
use url_shortener::domain::repositories::{SequenceRepository, UrlRepository};
use url_shortener::error::AppError;
use url_shortener::infrastructure::dns::HostResolver;
use url_shortener::routes;
use url_shortener::state::AppState;

/// In-memory stand-in for the `urls` and `counters` tables.
#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<UrlRecord>>,
    counters: Mutex<HashMap<String, i64>>,
}

impl InMemoryStore {
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for InMemoryStore {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn find_by_short_code(&self, short_url: i64) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_url == short_url)
            .cloned())
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let mut records = self.records.lock().unwrap();

        if records.iter().any(|r| r.short_url == new_record.short_url) {
            return Err(AppError::DuplicateKey {
                constraint: Some("urls_short_url_key".to_string()),
            });
        }

        let record = UrlRecord::new(
            records.len() as i64 + 1,
            new_record.original_url,
            new_record.short_url,
            Utc::now(),
        );
        records.push(record.clone());
        Ok(record)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.lock().unwrap().len() as i64)
    }
}

#[async_trait]
impl SequenceRepository for InMemoryStore {
    async fn ensure(&self, namespace: &str) -> Result<bool, AppError> {
        let mut counters = self.counters.lock().unwrap();
        if counters.contains_key(namespace) {
            return Ok(false);
        }
        counters.insert(namespace.to_string(), 0);
        Ok(true)
    }

    async fn next(&self, namespace: &str) -> Result<i64, AppError> {
        let mut counters = self.counters.lock().unwrap();
        let seq = counters.entry(namespace.to_string()).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }

    async fn current(&self, namespace: &str) -> Result<Option<i64>, AppError> {
        Ok(self.counters.lock().unwrap().get(namespace).copied())
    }
}

/// Resolver that resolves a fixed set of hosts and counts lookups.
#[derive(Default)]
pub struct StubResolver {
    unresolvable: Vec<String>,
    lookups: AtomicUsize,
}

impl StubResolver {
    /// Every host resolves except those in `unresolvable`.
    pub fn failing_for(unresolvable: &[&str]) -> Self {
        Self {
            unresolvable: unresolvable.iter().map(|h| h.to_string()).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<SocketAddr>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.unresolvable.iter().any(|h| h == host) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "NXDOMAIN"));
        }

        Ok(vec!["127.0.0.1:0".parse().unwrap()])
    }
}

/// Handles to the fakes behind a test router.
pub struct TestContext {
    pub app: Router,
    pub store: Arc<InMemoryStore>,
    pub resolver: Arc<StubResolver>,
}

pub const UNRESOLVABLE_HOST: &str = "unresolvable.example.com";

pub fn create_test_service(
    store: Arc<InMemoryStore>,
    resolver: Arc<StubResolver>,
) -> Arc<ShortenService> {
    Arc::new(ShortenService::new(
        store.clone(),
        store,
        UrlValidator::new(resolver),
    ))
}

/// Full router over an in-memory store and a stub resolver.
pub fn create_test_app() -> TestContext {
    let store = Arc::new(InMemoryStore::default());
    let resolver = Arc::new(StubResolver::failing_for(&[UNRESOLVABLE_HOST]));

    let state = AppState::new(create_test_service(store.clone(), resolver.clone()));
    let app = routes::router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/public"));

    TestContext {
        app,
        store,
        resolver,
    }
}
