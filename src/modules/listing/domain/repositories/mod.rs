mod listing_source;

pub use listing_source::*;
