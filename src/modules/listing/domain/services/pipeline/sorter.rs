use std::cmp::Ordering;

use crate::modules::listing::domain::{entities::Listing, value_objects::SortKey};

/// Orders listings for the results page
///
/// All orderings are stable. Listings missing the sort field go after every
/// listing that has it, whichever the direction, keeping their input order.
pub struct ListingSorter;

impl ListingSorter {
    pub fn sort(listings: &mut [Listing], key: SortKey) {
        match key {
            SortKey::Newest => {
                listings.sort_by(|a, b| missing_last(a.created_date, b.created_date, |x, y| y.cmp(&x)))
            }
            SortKey::PriceLow => listings.sort_by(|a, b| missing_last(a.price, b.price, ascending)),
            SortKey::PriceHigh => {
                listings.sort_by(|a, b| missing_last(a.price, b.price, |x, y| ascending(y, x)))
            }
            SortKey::MileageLow => {
                listings.sort_by(|a, b| missing_last(a.mileage.plain, b.mileage.plain, ascending))
            }
            SortKey::Unsorted => {}
        }
    }

    pub fn sorted(mut listings: Vec<Listing>, key: SortKey) -> Vec<Listing> {
        Self::sort(&mut listings, key);
        listings
    }
}

fn ascending(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn missing_last<T, F>(a: Option<T>, b: Option<T>, present: F) -> Ordering
where
    F: FnOnce(T, T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => present(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
