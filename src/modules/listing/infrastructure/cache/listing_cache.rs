use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::modules::listing::domain::{
    entities::Listing, repositories::ListingSource, services::CatalogProcessor,
};
use crate::shared::{errors::AppError, utils::LogContext};

/// Name plus schema version; bumping the version orphans old entries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    name: String,
    version: u32,
}

impl CacheKey {
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }

    /// The key every storefront page shares
    pub fn all_listings() -> Self {
        Self::new("cars-all", 4)
    }
}

impl Default for CacheKey {
    fn default() -> Self {
        Self::all_listings()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:v{}", self.name, self.version)
    }
}

/// Why a revalidation was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevalidationTrigger {
    /// A page using the key was mounted; always refetches
    Mount,
    /// The window regained focus; always refetches
    WindowFocus,
    /// Warm-up ahead of navigation; refetches only stale entries
    Prefetch,
}

/// What observers of a key see
#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    pub listings: Arc<Vec<Listing>>,
    pub is_loading: bool,
    pub fetched_at: Option<DateTime<Utc>>,
    pub last_error: Option<AppError>,
    /// Bumped on every successful replacement of the list
    pub generation: u64,
}

impl CacheSnapshot {
    pub fn empty() -> Self {
        Self {
            listings: Arc::new(Vec::new()),
            is_loading: false,
            fetched_at: None,
            last_error: None,
            generation: 0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.fetched_at.is_some()
    }
}

impl Default for CacheSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub fetches: u64,
    pub failures: u64,
    pub entries_count: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

struct CacheEntry {
    state: watch::Sender<CacheSnapshot>,
    in_flight: AtomicUsize,
    stale: AtomicBool,
}

impl CacheEntry {
    fn new() -> Self {
        let (state, _) = watch::channel(CacheSnapshot::empty());
        Self {
            state,
            in_flight: AtomicUsize::new(0),
            stale: AtomicBool::new(false),
        }
    }

    fn is_fresh(&self, stale_time: Duration) -> bool {
        if self.stale.load(Ordering::Acquire) {
            return false;
        }
        let Some(fetched_at) = self.state.borrow().fetched_at else {
            return false;
        };
        Utc::now()
            .signed_duration_since(fetched_at)
            .to_std()
            .map_or(true, |age| age < stale_time)
    }
}

/// Counts one fetch against an entry while alive
///
/// Dropping the last guard clears `is_loading`, including when the
/// revalidating future is dropped before its fetch completes.
struct InFlight {
    entry: Arc<CacheEntry>,
}

impl InFlight {
    fn enter(entry: Arc<CacheEntry>) -> Self {
        entry.in_flight.fetch_add(1, Ordering::AcqRel);
        entry.state.send_modify(|snapshot| snapshot.is_loading = true);
        Self { entry }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let remaining = self.entry.in_flight.fetch_sub(1, Ordering::AcqRel) - 1;
        if remaining == 0 {
            self.entry.state.send_if_modified(|snapshot| {
                let was_loading = snapshot.is_loading;
                snapshot.is_loading = false;
                was_loading
            });
        }
    }
}

/// In-memory listing cache shared by every page
///
/// Each key holds one validated list. A successful fetch replaces the whole
/// list; a failed fetch keeps it and records the error. Subscribers are
/// notified on every state change.
pub struct ListingCache {
    source: Arc<dyn ListingSource>,
    processor: Arc<CatalogProcessor>,
    entries: DashMap<CacheKey, Arc<CacheEntry>>,
    row_limit: usize,
    stale_time: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
    fetches: AtomicU64,
    failures: AtomicU64,
}

impl ListingCache {
    pub fn new(
        source: Arc<dyn ListingSource>,
        processor: Arc<CatalogProcessor>,
        row_limit: usize,
        stale_time: Duration,
    ) -> Self {
        Self {
            source,
            processor,
            entries: DashMap::new(),
            row_limit,
            stale_time,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            fetches: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    fn entry(&self, key: &CacheKey) -> Arc<CacheEntry> {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| Arc::new(CacheEntry::new()));
        Arc::clone(entry.value())
    }

    /// Current state of a key without fetching
    pub fn snapshot(&self, key: &CacheKey) -> CacheSnapshot {
        let snapshot = match self.entries.get(key) {
            Some(entry) => {
                let current = entry.state.borrow().clone();
                current
            }
            None => CacheSnapshot::empty(),
        };

        if snapshot.is_loaded() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        snapshot
    }

    /// Observe every state change of a key
    pub fn subscribe(&self, key: &CacheKey) -> watch::Receiver<CacheSnapshot> {
        self.entry(key).state.subscribe()
    }

    /// Fetch and replace the list for `key` unless a prefetch finds it fresh
    ///
    /// Never fails: fetch errors land in the returned snapshot's
    /// `last_error` and the previous list stays in place.
    pub async fn revalidate(&self, key: &CacheKey, trigger: RevalidationTrigger) -> CacheSnapshot {
        let entry = self.entry(key);

        if trigger == RevalidationTrigger::Prefetch && entry.is_fresh(self.stale_time) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            LogContext::cache_event(&key.to_string(), "prefetch skipped (fresh)", None);
            let current = entry.state.borrow().clone();
            return current;
        }

        debug!("Revalidating {} on {:?}", key, trigger);
        let in_flight = InFlight::enter(Arc::clone(&entry));
        self.fetches.fetch_add(1, Ordering::Relaxed);

        let result = self.source.fetch_recent(self.row_limit).await;

        match result {
            Ok(records) => {
                let output = self.processor.prepare(records);
                let count = output.listings.len();
                entry.stale.store(false, Ordering::Release);
                entry.state.send_modify(|snapshot| {
                    snapshot.listings = Arc::new(output.listings);
                    snapshot.fetched_at = Some(Utc::now());
                    snapshot.last_error = None;
                    snapshot.generation += 1;
                });
                LogContext::cache_event(&key.to_string(), "replaced", Some(count));
            }
            Err(error) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                warn!("Fetch for {} failed, keeping previous list: {}", key, error);
                entry.state.send_modify(|snapshot| snapshot.last_error = Some(error));
            }
        }
        drop(in_flight);

        let snapshot = entry.state.borrow().clone();
        snapshot
    }

    /// Mark a key stale so the next prefetch refetches it
    pub fn invalidate(&self, key: &CacheKey) {
        if let Some(entry) = self.entries.get(key) {
            entry.stale.store(true, Ordering::Release);
            LogContext::cache_event(&key.to_string(), "invalidated", None);
        }
    }

    /// Drop every entry; existing subscribers see their channel close
    pub fn clear(&self) {
        let count = self.entries.len();
        self.entries.clear();
        debug!("Cleared {} cache entries", count);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            fetches: self.fetches.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            entries_count: self.entries.len(),
        }
    }
}
