use std::collections::HashSet;

use crate::modules::listing::domain::entities::{HasListingId, ListingId};

/// Outcome of one dedup pass
#[derive(Debug, Clone)]
pub struct DedupOutcome<T> {
    pub kept: Vec<T>,
    pub invalid: usize,
    pub duplicates: usize,
}

/// Keeps the first record for each id and drops records without one
pub struct ListingDeduplicator;

impl ListingDeduplicator {
    pub fn dedupe<T: HasListingId>(records: Vec<T>) -> DedupOutcome<T> {
        let mut seen: HashSet<ListingId> = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        let mut invalid = 0;
        let mut duplicates = 0;

        for record in records {
            let Some(id) = record.listing_id() else {
                invalid += 1;
                continue;
            };

            if seen.insert(id.clone()) {
                kept.push(record);
            } else {
                log::debug!("Dropping duplicate listing {}", id);
                duplicates += 1;
            }
        }

        if invalid > 0 {
            log::debug!("Dropped {} listings without an id", invalid);
        }

        DedupOutcome {
            kept,
            invalid,
            duplicates,
        }
    }
}
