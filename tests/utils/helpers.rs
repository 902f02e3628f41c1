/// Test helper functions and service builders
use async_trait::async_trait;
use carmarket_lib::{
    modules::listing::{
        CatalogProcessor, CatalogService, ListingCache, ListingSource, RawListing,
    },
    shared::errors::{AppError, AppResult},
};
use mockall::mock;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

mock! {
    pub Source {}

    #[async_trait]
    impl ListingSource for Source {
        async fn fetch_recent(&self, limit: usize) -> AppResult<Vec<RawListing>>;
    }
}

/// Source that always returns the same rows
pub fn source_returning(rows: Vec<RawListing>) -> MockSource {
    let mut source = MockSource::new();
    source
        .expect_fetch_recent()
        .returning(move |_| Ok(rows.clone()));
    source
}

/// Source whose nth call gets the nth scripted response; the last one repeats
pub fn scripted_source(responses: Vec<AppResult<Vec<RawListing>>>) -> (MockSource, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut source = MockSource::new();
    source.expect_fetch_recent().returning(move |_| {
        let call = counter.fetch_add(1, Ordering::SeqCst);
        let index = call.min(responses.len().saturating_sub(1));
        responses
            .get(index)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    });
    (source, calls)
}

/// Source whose first fetch hangs; later fetches return `rows` at once
pub struct StalledFirstFetch {
    rows: Vec<RawListing>,
    calls: AtomicUsize,
}

impl StalledFirstFetch {
    pub fn new(rows: Vec<RawListing>) -> Self {
        Self {
            rows,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ListingSource for StalledFirstFetch {
    async fn fetch_recent(&self, _limit: usize) -> AppResult<Vec<RawListing>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        Ok(self.rows.clone())
    }
}

pub fn store_down() -> AppError {
    AppError::ExternalServiceError("Supabase server error: 503".to_string())
}

pub fn build_cache(source: MockSource, stale_time: Duration) -> Arc<ListingCache> {
    Arc::new(ListingCache::new(
        Arc::new(source),
        Arc::new(CatalogProcessor::new()),
        100,
        stale_time,
    ))
}

pub fn build_service(source: MockSource) -> CatalogService {
    build_service_over(Arc::new(source))
}

pub fn build_service_over(source: Arc<dyn ListingSource>) -> CatalogService {
    let processor = Arc::new(CatalogProcessor::new());
    let cache = Arc::new(ListingCache::new(
        source,
        Arc::clone(&processor),
        100,
        Duration::from_secs(600),
    ));
    CatalogService::new(cache, processor)
}
