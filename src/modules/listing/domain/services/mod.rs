pub mod catalog_processor;
pub mod page_views;
pub mod pipeline;

pub use catalog_processor::{CatalogProcessor, PipelineOutput};
pub use page_views::{available_makes, find_by_id, models_for_make, similar_listings, HomeSections};
