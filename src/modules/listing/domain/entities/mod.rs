pub mod listing;
pub mod raw_listing;

pub use listing::{Listing, ListingId, MileageReading, DEFAULT_PLACEHOLDER_IMAGE};
pub use raw_listing::{HasListingId, RawListing};
