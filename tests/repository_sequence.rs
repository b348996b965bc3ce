use sqlx::PgPool;
use std::sync::Arc;
use url_shortener::domain::repositories::{SequenceRepository, URLS_NAMESPACE};
use url_shortener::infrastructure::persistence::PgSequenceRepository;

#[sqlx::test]
async fn test_ensure_is_idempotent(pool: PgPool) {
    let repo = PgSequenceRepository::new(Arc::new(pool));

    assert!(repo.ensure(URLS_NAMESPACE).await.unwrap());
    assert!(!repo.ensure(URLS_NAMESPACE).await.unwrap());
    assert_eq!(repo.current(URLS_NAMESPACE).await.unwrap(), Some(0));
}

#[sqlx::test]
async fn test_next_is_strictly_increasing(pool: PgPool) {
    let repo = PgSequenceRepository::new(Arc::new(pool));
    repo.ensure(URLS_NAMESPACE).await.unwrap();

    let first = repo.next(URLS_NAMESPACE).await.unwrap();
    let second = repo.next(URLS_NAMESPACE).await.unwrap();
    let third = repo.next(URLS_NAMESPACE).await.unwrap();

    assert_eq!((first, second, third), (1, 2, 3));
    assert_eq!(repo.current(URLS_NAMESPACE).await.unwrap(), Some(3));
}

#[sqlx::test]
async fn test_next_creates_missing_counter(pool: PgPool) {
    let repo = PgSequenceRepository::new(Arc::new(pool));

    assert_eq!(repo.current("other").await.unwrap(), None);
    assert_eq!(repo.next("other").await.unwrap(), 1);
}

#[sqlx::test]
async fn test_concurrent_next_never_repeats(pool: PgPool) {
    let repo = Arc::new(PgSequenceRepository::new(Arc::new(pool)));
    repo.ensure(URLS_NAMESPACE).await.unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(
            async move { repo.next(URLS_NAMESPACE).await.unwrap() },
        ));
    }

    let mut values = Vec::new();
    for handle in handles {
        values.push(handle.await.unwrap());
    }
    values.sort_unstable();

    assert_eq!(values, (1..=20).collect::<Vec<i64>>());
}
