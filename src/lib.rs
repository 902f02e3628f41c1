pub mod modules;
pub mod shared;

use std::sync::Arc;

use modules::{
    i18n::Translator,
    listing::{
        application::{CatalogService, SearchPage},
        domain::{
            repositories::ListingSource,
            services::{pipeline::CatalogConfig, CatalogProcessor},
        },
        infrastructure::{ListingCache, SupabaseListingSource},
    },
};
use shared::{
    errors::AppResult,
    utils::{init_logger, LogContext, TimedOperation},
    AppConfig,
};

/// Wire the catalog against the configured listing store
pub fn build_catalog(config: &AppConfig, catalog: CatalogConfig) -> AppResult<CatalogService> {
    let source: Arc<dyn ListingSource> = Arc::new(SupabaseListingSource::new(config)?);
    let processor = Arc::new(CatalogProcessor::with_config(catalog)?);
    let cache = Arc::new(ListingCache::new(
        source,
        Arc::clone(&processor),
        config.row_limit,
        config.prefetch_stale_time,
    ));

    Ok(CatalogService::new(cache, processor))
}

/// Run one search: `carmarket [query-string] [sort-key]`
pub async fn run(args: Vec<String>) -> AppResult<String> {
    init_logger();

    let config = AppConfig::from_env()?;
    let translator = Translator::new(config.locale);
    let service = build_catalog(&config, CatalogConfig::default())?;

    let query = args.first().map(String::as_str).unwrap_or("");
    let sort = args.get(1).map(String::as_str).unwrap_or("newest");

    let timer = TimedOperation::new("initial listing load");
    let snapshot = service.mount().await;
    timer.finish_with_info(&format!("{} listings", snapshot.listings.len()));
    if let Some(error) = &snapshot.last_error {
        LogContext::error_with_context(error, "Listing store unavailable");
    }

    let page = service.search_from_query(query, sort);
    Ok(render_search_page(&page, &translator))
}

/// Plain-text rendering of a results page
pub fn render_search_page(page: &SearchPage, translator: &Translator) -> String {
    let noun = if page.total == 1 {
        translator.t("searchResults.vehicle")
    } else {
        translator.t("searchResults.vehicles")
    };
    let mut lines = vec![format!(
        "{}: {} {} {}",
        translator.t("searchResults.title"),
        page.total,
        noun,
        translator.t("searchResults.found")
    )];
    if let Some(key) = page.sort.translation_key() {
        lines.push(format!("{}: {}", translator.t("search.sortBy"), translator.t(key)));
    }

    if page.is_empty() {
        lines.push(translator.t("searchResults.noVehicles"));
        lines.push(translator.t("searchResults.adjustFilters"));
        return lines.join("\n");
    }

    let not_specified = translator.t("carDetails.notSpecified");
    for listing in &page.listings {
        let price = listing
            .price
            .map(|p| format!("€{:.0}", p))
            .unwrap_or_else(|| not_specified.clone());
        let year = listing
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| not_specified.clone());
        let mileage = listing
            .mileage
            .raw
            .clone()
            .unwrap_or_else(|| not_specified.clone());
        let badge = listing
            .displayed_badge()
            .map(|badge| match badge.translation_key() {
                Some(key) => format!(" [{}]", translator.t(key)),
                None => format!(" [{}]", badge.label()),
            })
            .unwrap_or_default();

        lines.push(format!(
            "#{} {} | {} | {} | {}{}",
            listing.id,
            listing.title(),
            year,
            price,
            mileage,
            badge
        ));
    }

    lines.join("\n")
}
