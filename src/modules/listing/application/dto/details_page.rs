use serde::Serialize;

use crate::modules::listing::domain::{entities::Listing, value_objects::ContactLinks};

/// Detail page state; `listing` is `None` when the id is not in the cached list
#[derive(Debug, Clone, Serialize)]
pub struct DetailsPage {
    pub listing: Option<Listing>,
    pub similar: Vec<Listing>,
    pub contact: Option<ContactLinks>,
    pub is_loading: bool,
}

impl DetailsPage {
    /// Nothing to show and nothing coming
    pub fn is_not_found(&self) -> bool {
        self.listing.is_none() && !self.is_loading
    }
}
