use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::raw_listing::HasListingId;
use crate::modules::listing::domain::value_objects::PriceBadge;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?w=1200&q=80&fm=webp";

/// Opaque listing identifier
///
/// String and numeric ids from the store are both canonicalised to text,
/// so `7` and `"7"` name the same listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Falsy ids (null, empty string, 0, false) identify nothing
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(Self(s.trim().to_string())),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Odometer reading in the three shapes the catalog needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MileageReading {
    /// Display value exactly as stored, e.g. `"50,000 km"`
    pub raw: Option<String>,
    /// Digits-only parse of the raw value, used by the mileage ceiling filter
    pub sanitized: Option<u64>,
    /// Plain numeric coercion of the raw field, used by the mileage sort
    pub plain: Option<f64>,
}

/// A normalized vehicle listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub mileage: MileageReading,
    pub fuel_type: Option<String>,
    pub is_electric: bool,
    pub transmission: Option<String>,
    pub seller_type: Option<String>,
    pub body_type: Option<String>,
    pub color: Option<String>,
    pub power_hp: Option<i32>,
    pub doors: Option<i32>,
    pub seats: Option<i32>,
    pub seller_name: Option<String>,
    /// Seller location, falling back to the city
    pub location: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub features: Vec<String>,
    /// Never empty
    pub images: Vec<String>,
    pub main_image: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub price_badge: Option<PriceBadge>,
}

impl Listing {
    /// A listing with only an id; every optional field is absent
    pub fn new(id: ListingId) -> Self {
        Self {
            id,
            make: None,
            model: None,
            year: None,
            price: None,
            mileage: MileageReading::default(),
            fuel_type: None,
            is_electric: false,
            transmission: None,
            seller_type: None,
            body_type: None,
            color: None,
            power_hp: None,
            doors: None,
            seats: None,
            seller_name: None,
            location: None,
            description: None,
            phone: None,
            features: Vec::new(),
            images: vec![DEFAULT_PLACEHOLDER_IMAGE.to_string()],
            main_image: None,
            created_date: None,
            price_badge: None,
        }
    }

    /// "Make Model", skipping whichever part is missing
    pub fn title(&self) -> String {
        [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Card image: the main image when set, else the first gallery image
    pub fn primary_image(&self) -> &str {
        self.main_image
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
            .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
    }

    /// Containment check against the listing's feature text
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.contains(feature))
    }

    /// Badge to render, if any ("No rating" is never shown)
    pub fn displayed_badge(&self) -> Option<&PriceBadge> {
        self.price_badge.as_ref().filter(|badge| badge.is_displayed())
    }
}

impl HasListingId for Listing {
    fn listing_id(&self) -> Option<ListingId> {
        Some(self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_ids_are_rejected() {
        assert!(ListingId::from_value(&json!(null)).is_none());
        assert!(ListingId::from_value(&json!("")).is_none());
        assert!(ListingId::from_value(&json!("   ")).is_none());
        assert!(ListingId::from_value(&json!(0)).is_none());
        assert!(ListingId::from_value(&json!(false)).is_none());
    }

    #[test]
    fn numeric_and_text_ids_compare_equal() {
        assert_eq!(
            ListingId::from_value(&json!(12)),
            ListingId::from_value(&json!("12"))
        );
    }

    #[test]
    fn title_skips_missing_parts() {
        let mut listing = Listing::new(ListingId::new("1"));
        assert_eq!(listing.title(), "");

        listing.make = Some("BMW".to_string());
        assert_eq!(listing.title(), "BMW");

        listing.model = Some("X5".to_string());
        assert_eq!(listing.title(), "BMW X5");
    }

    #[test]
    fn primary_image_prefers_main_image() {
        let mut listing = Listing::new(ListingId::new("1"));
        assert_eq!(listing.primary_image(), DEFAULT_PLACEHOLDER_IMAGE);

        listing.main_image = Some("https://cdn/main.jpg".to_string());
        assert_eq!(listing.primary_image(), "https://cdn/main.jpg");
    }

    #[test]
    fn no_rating_badge_is_hidden() {
        let mut listing = Listing::new(ListingId::new("1"));
        listing.price_badge = Some(PriceBadge::NoRating);
        assert!(listing.displayed_badge().is_none());

        listing.price_badge = Some(PriceBadge::Good);
        assert_eq!(listing.displayed_badge(), Some(&PriceBadge::Good));
    }
}
