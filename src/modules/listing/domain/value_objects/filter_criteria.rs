use serde::{Deserialize, Serialize};

/// Facet value meaning "no constraint"
pub const ALL: &str = "All";

/// Upper bound of the price slider; a range ending here is unbounded
pub const DEFAULT_PRICE_CEILING: u64 = 500_000;

/// Upper bound of the mileage slider; at this value the ceiling is off
pub const DEFAULT_MILEAGE_CEILING: u64 = 300_000;

// Placeholder labels the search panels use for "any"
const SENTINEL_LABELS: [&str; 3] = [ALL, "All Makes", "All Types"];

/// True when a facet value imposes no constraint
pub fn is_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || SENTINEL_LABELS.contains(&value)
}

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Active only when narrowed from the full slider range
    pub fn is_active(&self) -> bool {
        self.min > 0 || self.max < DEFAULT_PRICE_CEILING
    }
}

/// Snapshot of every selectable search criterion, active or not
///
/// Each field's default is its sentinel: the default criteria match every
/// listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub make: String,
    pub model: String,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub price_range: PriceRange,
    pub max_mileage: u64,
    pub fuel_type: String,
    pub transmission: String,
    pub seller_type: String,
    /// Required features, all-of
    pub features: Vec<String>,
    pub electric_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            make: ALL.to_string(),
            model: ALL.to_string(),
            year_from: None,
            year_to: None,
            price_range: PriceRange::default(),
            max_mileage: DEFAULT_MILEAGE_CEILING,
            fuel_type: ALL.to_string(),
            transmission: ALL.to_string(),
            seller_type: ALL.to_string(),
            features: Vec::new(),
            electric_only: false,
        }
    }
}

fn active(value: &str) -> Option<&str> {
    (!is_sentinel(value)).then_some(value)
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_make(&self) -> Option<&str> {
        active(&self.make)
    }

    pub fn active_model(&self) -> Option<&str> {
        active(&self.model)
    }

    pub fn active_fuel_type(&self) -> Option<&str> {
        active(&self.fuel_type)
    }

    pub fn active_transmission(&self) -> Option<&str> {
        active(&self.transmission)
    }

    pub fn active_seller_type(&self) -> Option<&str> {
        active(&self.seller_type)
    }

    pub fn active_price_range(&self) -> Option<PriceRange> {
        self.price_range.is_active().then_some(self.price_range)
    }

    pub fn active_mileage_ceiling(&self) -> Option<u64> {
        (self.max_mileage < DEFAULT_MILEAGE_CEILING).then_some(self.max_mileage)
    }

    pub fn is_default(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active constraints; each required feature counts once
    pub fn active_count(&self) -> usize {
        let flags = [
            self.active_make().is_some(),
            self.active_model().is_some(),
            self.year_from.is_some(),
            self.year_to.is_some(),
            self.active_price_range().is_some(),
            self.active_mileage_ceiling().is_some(),
            self.active_fuel_type().is_some(),
            self.active_transmission().is_some(),
            self.active_seller_type().is_some(),
            self.electric_only,
        ];

        flags.iter().filter(|on| **on).count() + self.features.len()
    }

    /// Change the make; a different make invalidates the selected model
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        let make = make.into();
        if make != self.make {
            self.model = ALL.to_string();
        }
        self.make = make;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_years(mut self, from: Option<i32>, to: Option<i32>) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_max_mileage(mut self, max: u64) -> Self {
        self.max_mileage = max;
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    pub fn with_seller_type(mut self, seller_type: impl Into<String>) -> Self {
        self.seller_type = seller_type.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_electric_only(mut self, electric_only: bool) -> Self {
        self.electric_only = electric_only;
        self
    }

    /// Add the feature if absent, remove it if present
    pub fn toggle_feature(&mut self, feature: &str) {
        if let Some(pos) = self.features.iter().position(|f| f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature.to_string());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_are_inactive() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_default());
        assert_eq!(criteria.active_count(), 0);
        assert!(criteria.active_price_range().is_none());
        assert!(criteria.active_mileage_ceiling().is_none());
    }

    #[test]
    fn sentinel_labels_impose_nothing() {
        assert!(is_sentinel("All"));
        assert!(is_sentinel("All Makes"));
        assert!(is_sentinel("All Types"));
        assert!(is_sentinel("  "));
        assert!(!is_sentinel("BMW"));
        assert!(!is_sentinel("all"));
    }

    #[test]
    fn price_range_activates_when_narrowed() {
        assert!(!PriceRange::new(0, 500_000).is_active());
        assert!(PriceRange::new(5_000, 500_000).is_active());
        assert!(PriceRange::new(0, 50_000).is_active());
    }

    #[test]
    fn changing_make_resets_model() {
        let criteria = FilterCriteria::new()
            .with_make("BMW")
            .with_model("X5")
            .with_make("Audi");
        assert_eq!(criteria.make, "Audi");
        assert_eq!(criteria.model, ALL);

        let same = FilterCriteria::new()
            .with_make("BMW")
            .with_model("X5")
            .with_make("BMW");
        assert_eq!(same.model, "X5");
    }

    #[test]
    fn features_count_individually() {
        let criteria = FilterCriteria::new()
            .with_make("BMW")
            .with_features(["Sunroof", "Navigation"]);
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn toggle_feature_adds_then_removes() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_feature("Bluetooth");
        assert_eq!(criteria.features, vec!["Bluetooth".to_string()]);

        criteria.toggle_feature("Bluetooth");
        assert!(criteria.features.is_empty());
    }

    #[test]
    fn reset_restores_sentinels() {
        let mut criteria = FilterCriteria::new()
            .with_fuel_type("Diesel")
            .with_max_mileage(100_000)
            .with_electric_only(true);
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
