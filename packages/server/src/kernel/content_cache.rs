//! Time-based cache in front of a content source.
//!
//! Documents are reused until the revalidation window passes, then
//! refetched on the next request. Failed fetches are never cached, and
//! expired entries are dropped whenever a new document is stored.

use async_trait::async_trait;
use content::ContentKind;
use drupal_client::Document;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::{BaseContentSource, FetchError};

/// Revalidation window used by the site.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(300);

struct CacheEntry {
    document: Arc<Document>,
    fetched_at: Instant,
}

pub struct CachedContentSource<S> {
    inner: S,
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl<S: BaseContentSource> CachedContentSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached documents, fresh or stale.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every cached document.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    async fn get_or_fetch<F>(&self, key: String, fetch: F) -> Result<Arc<Document>, FetchError>
    where
        F: Future<Output = Result<Arc<Document>, FetchError>>,
    {
        if let Some(entry) = self.entries.read().await.get(&key) {
            if entry.fetched_at.elapsed() < self.ttl {
                tracing::debug!(key = %key, "Content cache hit");
                return Ok(entry.document.clone());
            }
        }

        // Concurrent misses on one key each fetch; the last write wins.
        tracing::debug!(key = %key, "Content cache miss, fetching");
        let document = fetch.await?;

        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < ttl);
        entries.insert(
            key,
            CacheEntry {
                document: document.clone(),
                fetched_at: Instant::now(),
            },
        );
        Ok(document)
    }
}

#[async_trait]
impl<S: BaseContentSource> BaseContentSource for CachedContentSource<S> {
    async fn fetch(&self, kind: ContentKind) -> Result<Arc<Document>, FetchError> {
        self.get_or_fetch(kind.as_str().to_string(), self.inner.fetch(kind))
            .await
    }

    async fn fetch_item(&self, kind: ContentKind, id: &str) -> Result<Arc<Document>, FetchError> {
        self.get_or_fetch(format!("{}/{}", kind, id), self.inner.fetch_item(kind, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockContentSource;
    use drupal_client::Resource;

    fn products_doc() -> Document {
        Document::collection(vec![Resource::new("node--product", "p1")], vec![])
    }

    #[tokio::test]
    async fn test_fresh_entry_served_from_cache() {
        let mock = MockContentSource::new().with_document(ContentKind::Products, products_doc());
        let calls = mock.calls();
        let cache = CachedContentSource::new(mock, DEFAULT_REVALIDATE);

        cache.fetch(ContentKind::Products).await.unwrap();
        cache.fetch(ContentKind::Products).await.unwrap();

        assert_eq!(calls.lock().unwrap().len(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_refetched() {
        let mock = MockContentSource::new().with_document(ContentKind::Products, products_doc());
        let calls = mock.calls();
        let cache = CachedContentSource::new(mock, Duration::ZERO);

        cache.fetch(ContentKind::Products).await.unwrap();
        cache.fetch(ContentKind::Products).await.unwrap();

        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_expired_entries_evicted_on_write() {
        let mock = MockContentSource::new().with_document(ContentKind::Products, products_doc());
        let cache = CachedContentSource::new(mock, Duration::ZERO);

        cache.fetch(ContentKind::Products).await.unwrap();
        cache.fetch(ContentKind::Articles).await.unwrap();
        cache.fetch_item(ContentKind::Footer, "f1").await.unwrap_err();

        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_failures_not_cached() {
        let mock = MockContentSource::new().failing(ContentKind::Articles);
        let calls = mock.calls();
        let cache = CachedContentSource::new(mock, DEFAULT_REVALIDATE);

        assert!(cache.fetch(ContentKind::Articles).await.is_err());
        assert!(cache.fetch(ContentKind::Articles).await.is_err());

        assert_eq!(calls.lock().unwrap().len(), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_items_cached_separately_from_collections() {
        let item = Document::single(Resource::new("node--product", "p1"), vec![]);
        let mock = MockContentSource::new()
            .with_document(ContentKind::Products, products_doc())
            .with_item(ContentKind::Products, "p1", item);
        let cache = CachedContentSource::new(mock, DEFAULT_REVALIDATE);

        let collection = cache.fetch(ContentKind::Products).await.unwrap();
        let single = cache.fetch_item(ContentKind::Products, "p1").await.unwrap();

        assert!(collection.resources().is_some());
        assert!(single.resources().is_none());
        assert_eq!(cache.len().await, 2);

        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
