//! Synchronous stages of the catalog pipeline
//!
//! raw rows → [`ListingNormalizer`] → [`ListingDeduplicator`] → validated list,
//! then per page [`FilterEngine`] → [`ListingSorter`]. Every stage is pure;
//! [`MetricsBuilder`] and [`StageTimer`] record what each one did.
pub mod config;
pub mod deduplicator;
pub mod filter_engine;
pub mod listing_normalizer;
pub mod metrics;
pub mod sorter;

pub use config::{CatalogConfig, CatalogConfigBuilder};
pub use deduplicator::{DedupOutcome, ListingDeduplicator};
pub use filter_engine::{
    ElectricPredicate, Facet, FacetPredicate, FeaturesPredicate, FilterEngine, ListingPredicate,
    MileageCeilingPredicate, PriceRangePredicate, YearRangePredicate,
};
pub use listing_normalizer::{parse_timestamp, ListingNormalizer};
pub use metrics::{MetricsBuilder, PipelineMetrics, StageTimer};
pub use sorter::ListingSorter;
