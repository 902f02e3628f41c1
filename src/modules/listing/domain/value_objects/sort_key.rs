use serde::{Deserialize, Serialize};
use std::fmt;

/// Orderings offered on the search results page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    MileageLow,
    /// Unrecognised key: keep input order
    Unsorted,
}

impl SortKey {
    pub fn parse(key: &str) -> Self {
        match key.trim() {
            "newest" => SortKey::Newest,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "mileage-low" => SortKey::MileageLow,
            _ => SortKey::Unsorted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::MileageLow => "mileage-low",
            SortKey::Unsorted => "unsorted",
        }
    }

    pub fn translation_key(&self) -> Option<&'static str> {
        match self {
            SortKey::Newest => Some("search.newest"),
            SortKey::PriceLow => Some("search.priceLow"),
            SortKey::PriceHigh => Some("search.priceHigh"),
            SortKey::MileageLow => Some("search.mileageLow"),
            SortKey::Unsorted => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
