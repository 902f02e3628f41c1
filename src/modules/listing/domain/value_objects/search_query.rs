use std::collections::HashMap;

use super::filter_criteria::{is_sentinel, FilterCriteria, PriceRange};
use crate::modules::listing::domain::entities::ListingId;
use crate::shared::utils::FieldParser;

/// Codec between `FilterCriteria` and the search page's URL query string
///
/// Decoding never fails: absent or unparseable parameters fall back to the
/// field's sentinel.
pub struct SearchQuery;

impl SearchQuery {
    pub const MAKE: &'static str = "make";
    pub const MODEL: &'static str = "model";
    pub const YEAR_FROM: &'static str = "yearFrom";
    pub const YEAR_TO: &'static str = "yearTo";
    pub const PRICE_FROM: &'static str = "priceFrom";
    pub const PRICE_TO: &'static str = "priceTo";
    pub const MAX_MILEAGE: &'static str = "maxMileage";
    pub const FUEL_TYPE: &'static str = "fuelType";
    pub const TRANSMISSION: &'static str = "transmission";
    pub const SELLER_TYPE: &'static str = "sellerType";
    pub const FEATURES: &'static str = "features";
    pub const ELECTRIC_ONLY: &'static str = "electricOnly";

    /// Parse a query string (with or without the leading `?`)
    pub fn decode(query: &str) -> FilterCriteria {
        let params = Self::parse_pairs(query);
        let text = |key: &str| {
            params
                .get(key)
                .filter(|value| !is_sentinel(value))
                .cloned()
        };

        let mut criteria = FilterCriteria::default();

        if let Some(make) = text(Self::MAKE) {
            criteria.make = make;
        }
        if let Some(model) = text(Self::MODEL) {
            criteria.model = model;
        }
        if let Some(fuel_type) = text(Self::FUEL_TYPE) {
            criteria.fuel_type = fuel_type;
        }
        if let Some(transmission) = text(Self::TRANSMISSION) {
            criteria.transmission = transmission;
        }
        if let Some(seller_type) = text(Self::SELLER_TYPE) {
            criteria.seller_type = seller_type;
        }

        criteria.year_from = params
            .get(Self::YEAR_FROM)
            .and_then(|v| FieldParser::leading_int(v))
            .and_then(|v| i32::try_from(v).ok());
        criteria.year_to = params
            .get(Self::YEAR_TO)
            .and_then(|v| FieldParser::leading_int(v))
            .and_then(|v| i32::try_from(v).ok());

        let price_from = params.get(Self::PRICE_FROM).and_then(|v| parse_bound(v));
        let price_to = params.get(Self::PRICE_TO).and_then(|v| parse_bound(v));
        if let (Some(min), Some(max)) = (price_from, price_to) {
            criteria.price_range = PriceRange::new(min, max);
        }

        if let Some(max) = params.get(Self::MAX_MILEAGE).and_then(|v| parse_bound(v)) {
            criteria.max_mileage = max;
        }

        if let Some(raw) = params.get(Self::FEATURES) {
            match serde_json::from_str::<Vec<String>>(raw) {
                Ok(features) => {
                    criteria.features = features
                        .into_iter()
                        .map(|f| f.trim().to_string())
                        .filter(|f| !f.is_empty())
                        .collect();
                }
                Err(e) => log::debug!("Ignoring malformed features parameter '{}': {}", raw, e),
            }
        }

        criteria.electric_only = params
            .get(Self::ELECTRIC_ONLY)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

        criteria
    }

    /// Serialize the active criteria; sentinels and `false` flags are skipped
    pub fn encode(criteria: &FilterCriteria) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(make) = criteria.active_make() {
            pairs.push((Self::MAKE, make.to_string()));
        }
        if let Some(model) = criteria.active_model() {
            pairs.push((Self::MODEL, model.to_string()));
        }
        if let Some(year) = criteria.year_from {
            pairs.push((Self::YEAR_FROM, year.to_string()));
        }
        if let Some(year) = criteria.year_to {
            pairs.push((Self::YEAR_TO, year.to_string()));
        }
        if let Some(range) = criteria.active_price_range() {
            pairs.push((Self::PRICE_FROM, range.min.to_string()));
            pairs.push((Self::PRICE_TO, range.max.to_string()));
        }
        if let Some(max) = criteria.active_mileage_ceiling() {
            pairs.push((Self::MAX_MILEAGE, max.to_string()));
        }
        if let Some(fuel_type) = criteria.active_fuel_type() {
            pairs.push((Self::FUEL_TYPE, fuel_type.to_string()));
        }
        if let Some(transmission) = criteria.active_transmission() {
            pairs.push((Self::TRANSMISSION, transmission.to_string()));
        }
        if let Some(seller_type) = criteria.active_seller_type() {
            pairs.push((Self::SELLER_TYPE, seller_type.to_string()));
        }
        if !criteria.features.is_empty() {
            if let Ok(json) = serde_json::to_string(&criteria.features) {
                pairs.push((Self::FEATURES, json));
            }
        }
        if criteria.electric_only {
            pairs.push((Self::ELECTRIC_ONLY, "true".to_string()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Route to the results page for the given criteria
    pub fn search_results_path(criteria: &FilterCriteria) -> String {
        let query = Self::encode(criteria);
        if query.is_empty() {
            "/search".to_string()
        } else {
            format!("/search?{}", query)
        }
    }

    pub fn details_path(id: &ListingId) -> String {
        format!("/cars/{}", urlencoding::encode(id.as_str()))
    }

    // First occurrence of a key wins
    fn parse_pairs(query: &str) -> HashMap<String, String> {
        let mut params = HashMap::new();

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) else {
                log::debug!("Skipping undecodable query pair '{}'", pair);
                continue;
            };
            params.entry(key).or_insert(value);
        }

        params
    }
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}

// Negative bounds clamp to zero
fn parse_bound(value: &str) -> Option<u64> {
    FieldParser::leading_int(value).map(|v| u64::try_from(v).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_floor_clamps_to_zero() {
        let criteria = SearchQuery::decode("priceFrom=-500&priceTo=20000");
        assert_eq!(criteria.price_range, PriceRange::new(0, 20_000));
        assert_eq!(criteria.active_price_range(), Some(PriceRange::new(0, 20_000)));

        let criteria = SearchQuery::decode("maxMileage=-1");
        assert_eq!(criteria.max_mileage, 0);
    }

    #[test]
    fn empty_query_decodes_to_defaults() {
        assert_eq!(SearchQuery::decode(""), FilterCriteria::default());
        assert_eq!(SearchQuery::decode("?"), FilterCriteria::default());
    }

    #[test]
    fn decodes_known_keys() {
        let criteria = SearchQuery::decode(
            "?make=BMW&model=X5&yearFrom=2015&yearTo=2020&priceFrom=1000&priceTo=50000&maxMileage=120000&fuelType=Diesel&transmission=Automatic",
        );

        assert_eq!(criteria.make, "BMW");
        assert_eq!(criteria.model, "X5");
        assert_eq!(criteria.year_from, Some(2015));
        assert_eq!(criteria.year_to, Some(2020));
        assert_eq!(criteria.price_range, PriceRange::new(1000, 50_000));
        assert_eq!(criteria.max_mileage, 120_000);
        assert_eq!(criteria.fuel_type, "Diesel");
        assert_eq!(criteria.transmission, "Automatic");
    }

    #[test]
    fn price_range_needs_both_bounds() {
        let criteria = SearchQuery::decode("priceFrom=1000");
        assert_eq!(criteria.price_range, PriceRange::default());
    }

    #[test]
    fn unparseable_values_fall_back_to_sentinels() {
        let criteria = SearchQuery::decode("yearFrom=soon&maxMileage=lots&features=notjson");
        assert_eq!(criteria.year_from, None);
        assert_eq!(criteria.max_mileage, 300_000);
        assert!(criteria.features.is_empty());
    }

    #[test]
    fn years_parse_by_leading_integer() {
        let criteria = SearchQuery::decode("yearFrom=2018abc");
        assert_eq!(criteria.year_from, Some(2018));
    }

    #[test]
    fn decodes_percent_and_plus_escapes() {
        let criteria = SearchQuery::decode("make=Land+Rover&model=Range%20Rover");
        assert_eq!(criteria.make, "Land Rover");
        assert_eq!(criteria.model, "Range Rover");
    }

    #[test]
    fn first_occurrence_wins() {
        let criteria = SearchQuery::decode("make=BMW&make=Audi");
        assert_eq!(criteria.make, "BMW");
    }

    #[test]
    fn encode_skips_sentinels() {
        let criteria = FilterCriteria::new()
            .with_make("All Makes")
            .with_fuel_type("All Types")
            .with_transmission("");
        assert_eq!(SearchQuery::encode(&criteria), "");
        assert_eq!(SearchQuery::search_results_path(&criteria), "/search");
    }

    #[test]
    fn encode_writes_active_criteria_in_order() {
        let criteria = FilterCriteria::new()
            .with_make("Land Rover")
            .with_price_range(0, 50_000)
            .with_features(["Sunroof"])
            .with_electric_only(true);

        assert_eq!(
            SearchQuery::encode(&criteria),
            "make=Land%20Rover&priceFrom=0&priceTo=50000&features=%5B%22Sunroof%22%5D&electricOnly=true"
        );
    }

    #[test]
    fn encoded_criteria_decode_back() {
        let criteria = FilterCriteria::new()
            .with_make("Toyota")
            .with_model("RAV4")
            .with_years(Some(2019), None)
            .with_max_mileage(80_000)
            .with_seller_type("Dealer")
            .with_features(["Navigation", "Heated Seats"]);

        assert_eq!(SearchQuery::decode(&SearchQuery::encode(&criteria)), criteria);
    }

    #[test]
    fn details_path_escapes_id() {
        assert_eq!(SearchQuery::details_path(&ListingId::new("a b")), "/cars/a%20b");
    }
}
