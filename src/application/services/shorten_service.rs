//! Short URL creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::UrlValidator;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{SequenceRepository, URLS_NAMESPACE, UrlRepository};
use crate::error::AppError;

/// Service for creating and resolving sequential short URLs.
///
/// Orchestrates validation, de-duplication by original URL, code allocation
/// from the `"urls"` sequence and record insertion.
///
/// # Concurrency
///
/// De-duplication is best-effort. Two concurrent first-time submissions of the
/// same URL can both miss the existing-record lookup and each allocate a
/// distinct code, leaving two records for one URL. Code uniqueness itself
/// relies on the store's atomic increment.
pub struct ShortenService {
    url_repository: Arc<dyn UrlRepository>,
    sequence_repository: Arc<dyn SequenceRepository>,
    validator: UrlValidator,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        sequence_repository: Arc<dyn SequenceRepository>,
        validator: UrlValidator,
    ) -> Self {
        Self {
            url_repository,
            sequence_repository,
            validator,
        }
    }

    /// Makes sure the `"urls"` counter exists. Called once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn initialize_counter(&self) -> Result<(), AppError> {
        if self.sequence_repository.ensure(URLS_NAMESPACE).await? {
            info!(namespace = URLS_NAMESPACE, "Counter initialized");
        } else {
            info!(namespace = URLS_NAMESPACE, "Counter already exists");
        }
        Ok(())
    }

    /// Returns the record for `url`, creating one if none exists.
    ///
    /// # Flow
    ///
    /// 1. Validate the URL (shape, parse, DNS)
    /// 2. Return the existing record for the URL, if any, unchanged
    /// 3. Otherwise allocate the next code and insert a new record
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrlFormat`] or [`AppError::DnsLookupFailed`]
    /// if validation fails; nothing is stored in that case.
    ///
    /// Returns [`AppError::DuplicateKey`] if the allocated code was already
    /// taken, and [`AppError::StoreUnavailable`] on database errors. A
    /// failed allocation never leads to an insert.
    pub async fn shorten(&self, url: &str) -> Result<UrlRecord, AppError> {
        self.validator.validate(url).await?;

        if let Some(existing) = self.url_repository.find_by_original_url(url).await? {
            debug!(
                short_url = existing.short_url,
                "Returning existing record for URL"
            );
            return Ok(existing);
        }

        let short_url = self.sequence_repository.next(URLS_NAMESPACE).await?;

        let record = self
            .url_repository
            .insert(NewUrlRecord {
                original_url: url.to_string(),
                short_url,
            })
            .await?;

        info!(
            short_url = record.short_url,
            original_url = %record.original_url,
            "Short URL created"
        );

        Ok(record)
    }

    /// Number of stored records. Doubles as a store connectivity probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn count_records(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }

    /// Resolves a short code, as received in the request path, to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `code` is not an integer or no record
    /// carries it. Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let short_url: i64 = code.parse().map_err(|_| AppError::not_found(code))?;

        self.url_repository
            .find_by_short_code(short_url)
            .await?
            .map(|record| record.original_url)
            .ok_or_else(|| AppError::not_found(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockSequenceRepository, MockUrlRepository};
    use crate::infrastructure::dns::MockHostResolver;
    use chrono::Utc;
    use std::io;

    fn create_test_record(short_url: i64, url: &str) -> UrlRecord {
        UrlRecord::new(short_url, url.to_string(), short_url, Utc::now())
    }

    fn resolving_validator() -> UrlValidator {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_lookup()
            .returning(|_| Ok(vec!["127.0.0.1:0".parse().unwrap()]));
        UrlValidator::new(Arc::new(resolver))
    }

    fn service(
        urls: MockUrlRepository,
        sequences: MockSequenceRepository,
        validator: UrlValidator,
    ) -> ShortenService {
        ShortenService::new(Arc::new(urls), Arc::new(sequences), validator)
    }

    #[tokio::test]
    async fn test_shorten_new_url_allocates_code() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_sequences = MockSequenceRepository::new();

        mock_urls
            .expect_find_by_original_url()
            .withf(|url| url == "https://www.freecodecamp.org")
            .times(1)
            .returning(|_| Ok(None));

        mock_sequences
            .expect_next()
            .withf(|namespace| namespace == "urls")
            .times(1)
            .returning(|_| Ok(1));

        mock_urls
            .expect_insert()
            .withf(|new_record| {
                new_record.short_url == 1 && new_record.original_url == "https://www.freecodecamp.org"
            })
            .times(1)
            .returning(|new_record| {
                Ok(create_test_record(
                    new_record.short_url,
                    &new_record.original_url,
                ))
            });

        let service = service(mock_urls, mock_sequences, resolving_validator());

        let record = service.shorten("https://www.freecodecamp.org").await.unwrap();

        assert_eq!(record.short_url, 1);
        assert_eq!(record.original_url, "https://www.freecodecamp.org");
    }

    #[tokio::test]
    async fn test_shorten_deduplication() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_sequences = MockSequenceRepository::new();

        let existing = create_test_record(5, "https://example.com");
        mock_urls
            .expect_find_by_original_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_sequences.expect_next().times(0);
        mock_urls.expect_insert().times(0);

        let service = service(mock_urls, mock_sequences, resolving_validator());

        let record = service.shorten("https://example.com").await.unwrap();

        assert_eq!(record.short_url, 5);
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_touches_nothing() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_sequences = MockSequenceRepository::new();
        let mut resolver = MockHostResolver::new();

        resolver.expect_lookup().times(0);
        mock_urls.expect_find_by_original_url().times(0);
        mock_urls.expect_insert().times(0);
        mock_sequences.expect_next().times(0);

        let service = service(
            mock_urls,
            mock_sequences,
            UrlValidator::new(Arc::new(resolver)),
        );

        let result = service.shorten("ftp://bad host").await;

        assert!(matches!(result, Err(AppError::InvalidUrlFormat)));
    }

    #[tokio::test]
    async fn test_shorten_dns_failure_touches_nothing() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_sequences = MockSequenceRepository::new();
        let mut resolver = MockHostResolver::new();

        resolver
            .expect_lookup()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::NotFound, "NXDOMAIN")));
        mock_urls.expect_find_by_original_url().times(0);
        mock_urls.expect_insert().times(0);
        mock_sequences.expect_next().times(0);

        let service = service(
            mock_urls,
            mock_sequences,
            UrlValidator::new(Arc::new(resolver)),
        );

        let result = service.shorten("https://unresolvable.example.com").await;

        assert!(matches!(result, Err(AppError::DnsLookupFailed { .. })));
    }

    #[tokio::test]
    async fn test_shorten_allocation_failure_skips_insert() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_sequences = MockSequenceRepository::new();

        mock_urls
            .expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));
        mock_sequences
            .expect_next()
            .times(1)
            .returning(|_| Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut)));
        mock_urls.expect_insert().times(0);

        let service = service(mock_urls, mock_sequences, resolving_validator());

        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_shorten_duplicate_key_is_propagated() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_sequences = MockSequenceRepository::new();

        mock_urls
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        mock_sequences.expect_next().returning(|_| Ok(3));
        mock_urls.expect_insert().times(1).returning(|_| {
            Err(AppError::DuplicateKey {
                constraint: Some("urls_short_url_key".to_string()),
            })
        });

        let service = service(mock_urls, mock_sequences, resolving_validator());

        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_shorten_distinct_urls_get_increasing_codes() {
        let mut mock_urls = MockUrlRepository::new();
        let mut mock_sequences = MockSequenceRepository::new();

        mock_urls
            .expect_find_by_original_url()
            .times(2)
            .returning(|_| Ok(None));

        let mut seq = 0;
        mock_sequences.expect_next().times(2).returning(move |_| {
            seq += 1;
            Ok(seq)
        });

        mock_urls.expect_insert().times(2).returning(|new_record| {
            Ok(create_test_record(
                new_record.short_url,
                &new_record.original_url,
            ))
        });

        let service = service(mock_urls, mock_sequences, resolving_validator());

        let first = service.shorten("https://example.com/a").await.unwrap();
        let second = service.shorten("https://example.com/b").await.unwrap();

        assert_ne!(first.short_url, second.short_url);
        assert!(second.short_url > first.short_url);
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_urls = MockUrlRepository::new();

        mock_urls
            .expect_find_by_short_code()
            .withf(|code| *code == 7)
            .times(1)
            .returning(|code| Ok(Some(create_test_record(code, "https://example.com/x"))));

        let service = service(
            mock_urls,
            MockSequenceRepository::new(),
            resolving_validator(),
        );

        assert_eq!(service.resolve("7").await.unwrap(), "https://example.com/x");
    }

    #[tokio::test]
    async fn test_resolve_missing_code() {
        let mut mock_urls = MockUrlRepository::new();

        mock_urls
            .expect_find_by_short_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(
            mock_urls,
            MockSequenceRepository::new(),
            resolving_validator(),
        );

        let result = service.resolve("9999").await;

        assert!(matches!(result, Err(AppError::NotFound { code }) if code == "9999"));
    }

    #[tokio::test]
    async fn test_resolve_non_numeric_code_skips_store() {
        let mut mock_urls = MockUrlRepository::new();
        mock_urls.expect_find_by_short_code().times(0);

        let service = service(
            mock_urls,
            MockSequenceRepository::new(),
            resolving_validator(),
        );

        let result = service.resolve("abc").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_initialize_counter_is_idempotent() {
        let mut mock_sequences = MockSequenceRepository::new();
        let mut created = true;
        mock_sequences
            .expect_ensure()
            .withf(|namespace| namespace == "urls")
            .times(2)
            .returning(move |_| {
                let was_created = created;
                created = false;
                Ok(was_created)
            });

        let service = service(
            MockUrlRepository::new(),
            mock_sequences,
            resolving_validator(),
        );

        assert!(service.initialize_counter().await.is_ok());
        assert!(service.initialize_counter().await.is_ok());
    }
}
