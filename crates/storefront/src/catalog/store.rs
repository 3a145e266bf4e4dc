//! Memoized catalog document.
//!
//! The document is fetched at most once per store. Concurrent callers that
//! arrive while the fetch is in flight wait on the same attempt, and its
//! outcome, success or failure, is what every later caller gets until
//! [`CatalogStore::reload`] is called.
//!
//! The fetch runs on its own task. A caller that gives up while waiting
//! (a dropped request, an aborted task) does not cancel it, so the callers
//! still waiting join the same attempt instead of starting another.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use moka::future::Cache;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use showroom_core::{Document, Section};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument};

use super::error::{CatalogError, SourceError};
use super::source::DocumentSource;

type LoadResult = Result<Loaded, CatalogError>;

/// A successfully loaded document: typed sections plus the raw object for
/// ad hoc section reads.
#[derive(Clone)]
struct Loaded {
    document: Arc<Document>,
    raw: Arc<Map<String, Value>>,
}

/// Shared, memoized access to the catalog document.
///
/// Cheap to clone; clones share the same cached document.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogStoreInner>,
}

struct CatalogStoreInner {
    source: Arc<dyn DocumentSource>,
    key: String,
    cache: Cache<String, LoadResult>,
    in_flight: Mutex<Option<watch::Receiver<Option<LoadResult>>>>,
}

impl CatalogStoreInner {
    /// Join the fetch in flight, or start one on a detached task.
    fn attempt(self: &Arc<Self>) -> watch::Receiver<Option<LoadResult>> {
        let mut slot = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        // A closed sender means that attempt is over.
        if let Some(rx) = slot.as_ref().filter(|rx| rx.has_changed().is_ok()) {
            return rx.clone();
        }

        let (tx, rx) = watch::channel(None);
        let inner = Arc::clone(self);
        tokio::spawn(async move {
            let result = fetch_document(inner.source.as_ref()).await;
            inner.cache.insert(inner.key.clone(), result.clone()).await;
            tx.send_replace(Some(result));
        });
        *slot = Some(rx.clone());
        rx
    }

    async fn join_attempt(self: Arc<Self>) -> LoadResult {
        let mut rx = self.attempt();
        let outcome = rx
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|done| (*done).clone());
        outcome.unwrap_or_else(|| Err(CatalogError::from(SourceError::Interrupted)))
    }
}

impl CatalogStore {
    /// Create a store over `source`. Nothing is fetched until the first
    /// [`load`](Self::load).
    #[must_use]
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        let key = source.location().to_string();
        Self {
            inner: Arc::new(CatalogStoreInner {
                source: Arc::new(source),
                key,
                cache: Cache::builder().max_capacity(1).build(),
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Location the document is read from.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.inner.key
    }

    /// The parsed document, fetching it on first use.
    ///
    /// # Errors
    ///
    /// [`CatalogError::LoadFailed`] if the fetch or parse failed. The same
    /// failure is returned to every caller until [`reload`](Self::reload).
    pub async fn load(&self) -> Result<Arc<Document>, CatalogError> {
        self.loaded().await.map(|loaded| loaded.document)
    }

    /// Drop the cached outcome and fetch the document again.
    ///
    /// The cached outcome is dropped before the new fetch starts, so a failed
    /// reload replaces a good document. The failure is then served to every
    /// caller until a later reload succeeds.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    #[instrument(skip(self), fields(location = %self.inner.key))]
    pub async fn reload(&self) -> Result<Arc<Document>, CatalogError> {
        info!("Reloading catalog");
        self.inner.cache.invalidate(&self.inner.key).await;
        self.load().await
    }

    /// Deserialize a top-level section of the document by its JSON key.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::SectionNotFound`] if `name` is not a known section,
    ///   or the section is absent or `null`
    /// - [`CatalogError::LoadFailed`] if the document did not load
    /// - [`CatalogError::InvalidSection`] if it does not deserialize into `T`
    pub async fn section<T: DeserializeOwned>(&self, name: &str) -> Result<T, CatalogError> {
        let section =
            Section::parse(name).ok_or_else(|| CatalogError::SectionNotFound(name.to_string()))?;
        let loaded = self.loaded().await?;
        match loaded.raw.get(section.as_str()) {
            None | Some(Value::Null) => Err(CatalogError::SectionNotFound(name.to_string())),
            Some(value) => {
                T::deserialize(value).map_err(|e| CatalogError::InvalidSection {
                    section: name.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }

    async fn loaded(&self) -> LoadResult {
        let inner = Arc::clone(&self.inner);
        let entry = self
            .inner
            .cache
            .entry(self.inner.key.clone())
            .or_insert_with(inner.join_attempt())
            .await;

        if !entry.is_fresh() {
            debug!(location = %self.inner.key, "Cache hit for catalog");
        }
        entry.into_value()
    }
}

#[instrument(skip(source), fields(location = %source.location()))]
async fn fetch_document(source: &dyn DocumentSource) -> LoadResult {
    let started = Instant::now();

    let parsed = match source.fetch().await {
        Ok(bytes) => parse_document(&bytes),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(loaded) => {
            info!(
                products = loaded.document.products.as_ref().map_or(0, Vec::len),
                categories = loaded.document.categories.as_ref().map_or(0, Vec::len),
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "Catalog loaded"
            );
            Ok(loaded)
        }
        Err(e) => {
            error!(error = %e, "Failed to load catalog");
            Err(CatalogError::from(e))
        }
    }
}

fn parse_document(bytes: &[u8]) -> Result<Loaded, SourceError> {
    let value: Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(SourceError::NotAnObject);
    }
    let document = Document::deserialize(&value)?;
    let Value::Object(raw) = value else {
        return Err(SourceError::NotAnObject);
    };
    Ok(Loaded {
        document: Arc::new(document),
        raw: Arc::new(raw),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use showroom_core::LookupError;

    use super::*;

    const DOC: &str = r#"{
        "products": [
            {"id": "w1", "name": "Calatrava", "brand": "Patek Philippe",
             "categoryId": "classic", "price": 30000, "discount": null}
        ],
        "categories": [{"id": "classic", "name": "Classic"}],
        "company": null,
        "faqs": [{"id": 1, "question": "Do you repair watches?", "answer": "Yes."}]
    }"#;

    /// Serves a fixed body and counts fetches.
    struct CountingSource {
        body: &'static str,
        fetches: AtomicUsize,
        delay: Duration,
    }

    impl CountingSource {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                fetches: AtomicUsize::new(0),
                delay: Duration::ZERO,
            }
        }
    }

    #[async_trait]
    impl DocumentSource for Arc<CountingSource> {
        async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.body.as_bytes().to_vec())
        }

        fn location(&self) -> &str {
            "memory://catalog"
        }
    }

    /// Fails the first `failures` fetches, then serves `DOC`.
    struct FlakySource {
        failures: usize,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl DocumentSource for Arc<FlakySource> {
        async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
            let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
            if attempt < self.failures {
                return Err(SourceError::Status {
                    url: "memory://catalog".to_string(),
                    status: 503,
                });
            }
            Ok(DOC.as_bytes().to_vec())
        }

        fn location(&self) -> &str {
            "memory://catalog"
        }
    }

    #[tokio::test]
    async fn test_load_parses_document() {
        let store = CatalogStore::new(Arc::new(CountingSource::new(DOC)));
        let doc = store.load().await.unwrap();
        assert_eq!(doc.products().unwrap().len(), 1);
        assert_eq!(
            doc.company().unwrap_err(),
            LookupError::MissingSection("company")
        );
    }

    #[tokio::test]
    async fn test_load_is_memoized() {
        let source = Arc::new(CountingSource::new(DOC));
        let store = CatalogStore::new(Arc::clone(&source));

        let first = store.load().await.unwrap();
        let second = store.load().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let source = Arc::new(CountingSource {
            delay: Duration::from_millis(50),
            ..CountingSource::new(DOC)
        });
        let store = CatalogStore::new(Arc::clone(&source));

        let other = store.clone();
        let (a, b) = tokio::join!(store.load(), other.load());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_aborted_loader_does_not_restart_fetch() {
        let source = Arc::new(CountingSource {
            delay: Duration::from_millis(100),
            ..CountingSource::new(DOC)
        });
        let store = CatalogStore::new(Arc::clone(&source));

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.load().await.map(|_| ()) }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = tokio::spawn({
            let store = store.clone();
            async move { store.load().await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        first.abort();

        let doc = second.await.unwrap().unwrap();
        assert_eq!(doc.products().unwrap().len(), 1);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_abandoned_fetch_still_fills_cache() {
        let source = Arc::new(CountingSource {
            delay: Duration::from_millis(50),
            ..CountingSource::new(DOC)
        });
        let store = CatalogStore::new(Arc::clone(&source));

        let only = tokio::spawn({
            let store = store.clone();
            async move { store.load().await.map(|_| ()) }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        only.abort();
        tokio::time::sleep(Duration::from_millis(100)).await;

        store.load().await.unwrap();
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_replayed_until_reload() {
        let source = Arc::new(FlakySource {
            failures: 1,
            fetches: AtomicUsize::new(0),
        });
        let store = CatalogStore::new(Arc::clone(&source));

        let first = store.load().await.unwrap_err();
        let second = store.load().await.unwrap_err();
        assert!(matches!(first, CatalogError::LoadFailed(_)));
        assert!(matches!(second, CatalogError::LoadFailed(_)));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

        let doc = store.reload().await.unwrap();
        assert_eq!(doc.products().unwrap().len(), 1);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_non_object_document_fails() {
        let store = CatalogStore::new(Arc::new(CountingSource::new("[1, 2, 3]")));
        let err = store.load().await.unwrap_err();
        match err {
            CatalogError::LoadFailed(source) => {
                assert!(matches!(*source, SourceError::NotAnObject));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_out_of_range_discount_fails_load() {
        const BODY: &str = r#"{
            "products": [
                {"id": "w1", "name": "Calatrava", "brand": "Patek Philippe",
                 "categoryId": "classic", "price": 30000, "discount": 150}
            ]
        }"#;
        let store = CatalogStore::new(Arc::new(CountingSource::new(BODY)));
        match store.load().await.unwrap_err() {
            CatalogError::LoadFailed(source) => {
                assert!(matches!(*source, SourceError::Parse(_)));
                assert!(source.to_string().contains("between 0 and 100"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_section_reads() {
        let store = CatalogStore::new(Arc::new(CountingSource::new(DOC)));

        let categories: Vec<showroom_core::model::Category> =
            store.section("categories").await.unwrap();
        assert_eq!(categories.len(), 1);

        let missing = store.section::<Value>("testimonials").await.unwrap_err();
        assert!(matches!(missing, CatalogError::SectionNotFound(ref s) if s == "testimonials"));

        let null = store.section::<Value>("company").await.unwrap_err();
        assert!(matches!(null, CatalogError::SectionNotFound(_)));

        let wrong = store.section::<Vec<u32>>("faqs").await.unwrap_err();
        assert!(matches!(wrong, CatalogError::InvalidSection { .. }));

        let unknown = store.section::<Value>("newsletter").await.unwrap_err();
        assert!(matches!(unknown, CatalogError::SectionNotFound(ref s) if s == "newsletter"));
    }
}
