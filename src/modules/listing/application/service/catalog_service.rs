use std::sync::Arc;

use tokio::sync::watch;

use crate::modules::listing::{
    application::dto::{DetailsPage, HomePage, SearchPage},
    domain::{
        entities::ListingId,
        services::{
            available_makes, find_by_id, models_for_make, similar_listings, CatalogProcessor,
            HomeSections,
        },
        value_objects::{ContactLinks, FilterCriteria, SearchQuery, SortKey},
    },
    infrastructure::{CacheKey, CacheSnapshot, CacheStats, ListingCache, RevalidationTrigger},
};
use crate::shared::utils::LogContext;

/// Page-level views over the shared listing cache
///
/// All pages read the same cache key, so moving between them never
/// refetches. Lifecycle hooks (`mount`, `window_focused`, `prefetch`) drive
/// revalidation; the page views only read the current snapshot.
#[derive(Clone)]
pub struct CatalogService {
    cache: Arc<ListingCache>,
    processor: Arc<CatalogProcessor>,
    key: CacheKey,
}

impl CatalogService {
    pub fn new(cache: Arc<ListingCache>, processor: Arc<CatalogProcessor>) -> Self {
        Self {
            cache,
            processor,
            key: CacheKey::all_listings(),
        }
    }

    pub fn cache_key(&self) -> &CacheKey {
        &self.key
    }

    pub async fn mount(&self) -> CacheSnapshot {
        self.cache.revalidate(&self.key, RevalidationTrigger::Mount).await
    }

    pub async fn window_focused(&self) -> CacheSnapshot {
        self.cache
            .revalidate(&self.key, RevalidationTrigger::WindowFocus)
            .await
    }

    /// Warm the cache ahead of navigation; no-op while the list is fresh
    pub async fn prefetch(&self) -> CacheSnapshot {
        self.cache
            .revalidate(&self.key, RevalidationTrigger::Prefetch)
            .await
    }

    pub fn subscribe(&self) -> watch::Receiver<CacheSnapshot> {
        self.cache.subscribe(&self.key)
    }

    pub fn home(&self) -> HomePage {
        let snapshot = self.cache.snapshot(&self.key);

        HomePage {
            sections: HomeSections::build(&snapshot.listings, self.processor.config()),
            makes: available_makes(&snapshot.listings),
            is_loading: snapshot.is_loading,
        }
    }

    pub fn search(&self, criteria: &FilterCriteria, sort: SortKey) -> SearchPage {
        let snapshot = self.cache.snapshot(&self.key);
        let output = self.processor.query(&snapshot.listings, criteria, sort);

        LogContext::search_operation(
            &SearchQuery::encode(criteria),
            Some(output.listings.len()),
        );

        SearchPage {
            total: output.listings.len(),
            listings: output.listings,
            criteria: criteria.clone(),
            sort,
            active_filters: criteria.active_count(),
            is_loading: snapshot.is_loading,
            error: snapshot.last_error.as_ref().map(ToString::to_string),
        }
    }

    /// Search page driven by the URL query string and a sort key name
    pub fn search_from_query(&self, query: &str, sort: &str) -> SearchPage {
        self.search(&SearchQuery::decode(query), SortKey::parse(sort))
    }

    pub fn details(&self, id: &ListingId) -> DetailsPage {
        let snapshot = self.cache.snapshot(&self.key);
        let listing = find_by_id(&snapshot.listings, id).cloned();

        let similar = listing
            .as_ref()
            .map(|target| similar_listings(&snapshot.listings, target, self.processor.config()))
            .unwrap_or_default();

        DetailsPage {
            contact: listing.as_ref().map(ContactLinks::for_listing),
            listing,
            similar,
            is_loading: snapshot.is_loading,
        }
    }

    pub fn makes(&self) -> Vec<String> {
        available_makes(&self.cache.snapshot(&self.key).listings)
    }

    pub fn models(&self, make: &str) -> Vec<String> {
        models_for_make(&self.cache.snapshot(&self.key).listings, make)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
