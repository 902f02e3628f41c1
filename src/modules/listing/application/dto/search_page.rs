use serde::Serialize;

use crate::modules::listing::domain::{
    entities::Listing,
    value_objects::{FilterCriteria, SortKey},
};

/// Search results page state
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    /// Filtered and sorted listings
    pub listings: Vec<Listing>,
    pub total: usize,
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    /// Badge count for the filter sidebar
    pub active_filters: usize,
    pub is_loading: bool,
    /// Message of the last failed fetch, if the list may be out of date
    pub error: Option<String>,
}

impl SearchPage {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty() && !self.is_loading
    }
}
