use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::config::CatalogConfig;
use crate::modules::listing::domain::{
    entities::{HasListingId, Listing, MileageReading, RawListing},
    value_objects::PriceBadge,
};
use crate::shared::utils::FieldParser;

/// Turns loosely-shaped store rows into canonical listings
///
/// Normalization never fails on optional fields: anything missing or
/// malformed becomes `None` (or an empty list). Only a missing id makes a
/// record unusable.
#[derive(Debug, Clone)]
pub struct ListingNormalizer {
    placeholder_image: String,
}

impl ListingNormalizer {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            placeholder_image: config.placeholder_image.clone(),
        }
    }

    /// Returns `None` only when the record has no usable id
    pub fn normalize(&self, raw: &RawListing) -> Option<Listing> {
        let record = raw.flattened();
        let id = record.listing_id()?;

        let text = |field: &str| record.get(field).and_then(FieldParser::text);
        let int = |field: &str| {
            record
                .get(field)
                .and_then(FieldParser::integer)
                .and_then(|v| i32::try_from(v).ok())
        };

        let fuel_type = text("fuel_type");
        let is_electric = record.get("is_electric").is_some_and(FieldParser::flag)
            || fuel_type
                .as_deref()
                .is_some_and(|fuel| fuel.to_lowercase().contains("electric"));

        let main_image = text("main_image");
        let images = self.images(record.get("images"), main_image.as_deref());

        let mut listing = Listing::new(id);
        listing.make = text("make");
        listing.model = text("model");
        listing.year = int("year");
        listing.price = record.get("price").and_then(FieldParser::plain_number);
        listing.mileage = Self::mileage(record.get("mileage"));
        listing.fuel_type = fuel_type;
        listing.is_electric = is_electric;
        listing.transmission = text("transmission");
        listing.seller_type = text("seller_type");
        listing.body_type = text("body_type");
        listing.color = text("color");
        listing.power_hp = int("power_hp");
        listing.doors = int("doors");
        listing.seats = int("seats");
        listing.seller_name = text("seller_name");
        listing.location = text("seller_location").or_else(|| text("city"));
        listing.description = text("description");
        listing.phone = text("seller_phone");
        listing.features = record
            .get("features")
            .map(FieldParser::string_list)
            .unwrap_or_default();
        listing.images = images;
        listing.main_image = main_image;
        listing.created_date = record.get("created_date").and_then(parse_timestamp);
        listing.price_badge = text("price_badge").and_then(|label| PriceBadge::parse(&label));

        Some(listing)
    }

    fn images(&self, value: Option<&Value>, main_image: Option<&str>) -> Vec<String> {
        let images = value.map(FieldParser::string_list).unwrap_or_default();
        if !images.is_empty() {
            return images;
        }

        vec![main_image.unwrap_or(&self.placeholder_image).to_string()]
    }

    fn mileage(value: Option<&Value>) -> MileageReading {
        let Some(value) = value else {
            return MileageReading::default();
        };

        let raw = FieldParser::text(value);
        MileageReading {
            sanitized: raw.as_deref().and_then(FieldParser::sanitized_digits),
            plain: FieldParser::plain_number(value),
            raw,
        }
    }
}

impl Default for ListingNormalizer {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

/// RFC 3339, naive ISO date-time (taken as UTC), or a bare date
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
