use async_trait::async_trait;

use crate::{modules::listing::domain::entities::RawListing, shared::errors::AppResult};

/// Read-only access to the hosted listing store
///
/// The catalog only ever issues one query: the newest `limit` rows, ordered
/// by creation time descending. Rows come back untyped; normalization
/// happens downstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch up to `limit` rows, newest first
    async fn fetch_recent(&self, limit: usize) -> AppResult<Vec<RawListing>>;
}
