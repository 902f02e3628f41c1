pub mod cache;
pub mod external;

pub use cache::{CacheKey, CacheSnapshot, CacheStats, ListingCache, RevalidationTrigger};
pub use external::SupabaseListingSource;
