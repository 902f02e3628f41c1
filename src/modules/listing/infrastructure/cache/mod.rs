mod listing_cache;

pub use listing_cache::{CacheKey, CacheSnapshot, CacheStats, ListingCache, RevalidationTrigger};
