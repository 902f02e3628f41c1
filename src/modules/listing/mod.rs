pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CatalogService;
pub use domain::entities::{Listing, ListingId, RawListing};
pub use domain::repositories::ListingSource;
pub use domain::services::CatalogProcessor;
pub use domain::value_objects::{FilterCriteria, SearchQuery, SortKey};
pub use infrastructure::{CacheKey, ListingCache, SupabaseListingSource};
