use std::collections::BTreeSet;

use serde::Serialize;

use crate::modules::listing::domain::{
    entities::{Listing, ListingId},
    services::pipeline::CatalogConfig,
    value_objects::is_sentinel,
};

/// Landing page carousels, each a prefix of the validated list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeSections {
    pub recent: Vec<Listing>,
    pub electric: Vec<Listing>,
    pub premium: Vec<Listing>,
    pub suvs: Vec<Listing>,
}

impl HomeSections {
    pub fn build(listings: &[Listing], config: &CatalogConfig) -> Self {
        let marker = config.suv_body_marker.to_lowercase();
        let highlight = config.highlight_section_size;

        Self {
            recent: prefix(listings, config.recent_section_size, |_| true),
            electric: prefix(listings, highlight, |l| l.is_electric),
            premium: prefix(listings, highlight, |l| {
                l.price.is_some_and(|p| p > config.premium_price_threshold)
            }),
            suvs: prefix(listings, highlight, |l| {
                l.body_type
                    .as_deref()
                    .is_some_and(|body| body.to_lowercase().contains(&marker))
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

fn prefix<F>(listings: &[Listing], limit: usize, pred: F) -> Vec<Listing>
where
    F: Fn(&Listing) -> bool,
{
    listings
        .iter()
        .filter(|listing| pred(listing))
        .take(limit)
        .cloned()
        .collect()
}

pub fn find_by_id<'a>(listings: &'a [Listing], id: &ListingId) -> Option<&'a Listing> {
    listings.iter().find(|listing| &listing.id == id)
}

/// Other listings of the same make that can fill a card: model, non-zero
/// price and a real photo are required. List order kept.
pub fn similar_listings(listings: &[Listing], target: &Listing, config: &CatalogConfig) -> Vec<Listing> {
    let Some(make) = target.make.as_deref() else {
        return Vec::new();
    };

    listings
        .iter()
        .filter(|listing| listing.id != target.id && listing.make.as_deref() == Some(make))
        .filter(|listing| listing.model.is_some())
        .filter(|listing| listing.price.is_some_and(|price| price > 0.0))
        .filter(|listing| has_photo(listing, &config.placeholder_image))
        .take(config.similar_limit)
        .cloned()
        .collect()
}

fn has_photo(listing: &Listing, placeholder: &str) -> bool {
    listing.main_image.is_some() || listing.images.iter().any(|image| image != placeholder)
}

/// Sorted distinct makes
pub fn available_makes(listings: &[Listing]) -> Vec<String> {
    listings
        .iter()
        .filter_map(|listing| listing.make.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted distinct models of one make; nothing for a sentinel make
pub fn models_for_make(listings: &[Listing], make: &str) -> Vec<String> {
    if is_sentinel(make) {
        return Vec::new();
    }

    listings
        .iter()
        .filter(|listing| listing.make.as_deref() == Some(make))
        .filter_map(|listing| listing.model.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
