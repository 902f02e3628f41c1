use crate::modules::listing::domain::{
    entities::{Listing, RawListing},
    services::pipeline::*,
    value_objects::{FilterCriteria, SortKey},
};
use crate::shared::errors::{AppError, AppResult};

/// Listings plus what the pipeline did to produce them
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub listings: Vec<Listing>,
    pub metrics: PipelineMetrics,
}

/// Runs the catalog pipeline stages in order
///
/// `prepare` turns a raw store response into the validated list the cache
/// holds. `query` applies one page's criteria and ordering to that list.
/// Neither step mutates its input.
pub struct CatalogProcessor {
    config: CatalogConfig,
    normalizer: ListingNormalizer,
}

impl CatalogProcessor {
    pub fn new() -> Self {
        let config = CatalogConfig::default();
        let normalizer = ListingNormalizer::new(&config);
        Self { config, normalizer }
    }

    pub fn with_config(config: CatalogConfig) -> AppResult<Self> {
        config.validate().map_err(AppError::ValidationError)?;

        let normalizer = ListingNormalizer::new(&config);
        Ok(Self { config, normalizer })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Normalize then dedupe a raw response
    pub fn prepare(&self, records: Vec<RawListing>) -> PipelineOutput {
        let mut metrics = MetricsBuilder::start();
        metrics.input_count(records.len());

        let timer = StageTimer::start("Normalization");
        let normalized: Vec<Listing> = records
            .iter()
            .filter_map(|raw| self.normalizer.normalize(raw))
            .collect();
        let invalid = records.len() - normalized.len();
        timer.stop(&mut metrics);

        let timer = StageTimer::start("Deduplication");
        let outcome = ListingDeduplicator::dedupe(normalized);
        timer.stop(&mut metrics);

        metrics.invalid_count(invalid + outcome.invalid);
        metrics.duplicate_count(outcome.duplicates);
        metrics.output_count(outcome.kept.len());
        let metrics = metrics.build();

        log::debug!(
            "CATALOG: Prepared {} listings from {} records ({} invalid, {} duplicate)",
            metrics.output_count,
            metrics.input_count,
            metrics.invalid_count,
            metrics.duplicate_count
        );

        PipelineOutput {
            listings: outcome.kept,
            metrics,
        }
    }

    /// Filter then sort a validated list
    pub fn query(&self, listings: &[Listing], criteria: &FilterCriteria, sort: SortKey) -> PipelineOutput {
        let mut metrics = MetricsBuilder::start();
        metrics.input_count(listings.len());

        let timer = StageTimer::start("Filtering");
        let engine = FilterEngine::from_criteria(criteria);
        let mut results = engine.apply(listings);
        timer.stop(&mut metrics);
        metrics.filtered_count(listings.len() - results.len());

        let timer = StageTimer::start("Sorting");
        ListingSorter::sort(&mut results, sort);
        timer.stop(&mut metrics);

        metrics.output_count(results.len());
        let metrics = metrics.build();

        log::debug!(
            "CATALOG: {} of {} listings match {:?} (sort {})",
            metrics.output_count,
            metrics.input_count,
            engine.active_predicates(),
            sort
        );

        PipelineOutput {
            listings: results,
            metrics,
        }
    }
}

impl Default for CatalogProcessor {
    fn default() -> Self {
        Self::new()
    }
}
