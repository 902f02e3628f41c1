use crate::modules::listing::domain::{entities::Listing, value_objects::FilterCriteria};

/// One active search constraint
///
/// Predicates are built only for criteria that are active, so every
/// predicate constrains. A listing missing the field a predicate inspects
/// never matches it.
pub trait ListingPredicate: Send + Sync {
    fn matches(&self, listing: &Listing) -> bool;
    fn name(&self) -> &'static str;
}

/// Exact-match text facets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Make,
    Model,
    FuelType,
    Transmission,
    SellerType,
}

impl Facet {
    fn value_of<'a>(&self, listing: &'a Listing) -> Option<&'a str> {
        match self {
            Facet::Make => listing.make.as_deref(),
            Facet::Model => listing.model.as_deref(),
            Facet::FuelType => listing.fuel_type.as_deref(),
            Facet::Transmission => listing.transmission.as_deref(),
            Facet::SellerType => listing.seller_type.as_deref(),
        }
    }
}

/// Case-sensitive equality on a text facet
#[derive(Debug, Clone)]
pub struct FacetPredicate {
    facet: Facet,
    expected: String,
}

impl FacetPredicate {
    pub fn new(facet: Facet, expected: impl Into<String>) -> Self {
        Self {
            facet,
            expected: expected.into(),
        }
    }
}

impl ListingPredicate for FacetPredicate {
    fn matches(&self, listing: &Listing) -> bool {
        self.facet.value_of(listing) == Some(self.expected.as_str())
    }

    fn name(&self) -> &'static str {
        match self.facet {
            Facet::Make => "Make",
            Facet::Model => "Model",
            Facet::FuelType => "FuelType",
            Facet::Transmission => "Transmission",
            Facet::SellerType => "SellerType",
        }
    }
}

/// Inclusive model year bounds, each optional
#[derive(Debug, Clone)]
pub struct YearRangePredicate {
    from: Option<i32>,
    to: Option<i32>,
}

impl YearRangePredicate {
    pub fn new(from: Option<i32>, to: Option<i32>) -> Self {
        Self { from, to }
    }
}

impl ListingPredicate for YearRangePredicate {
    fn matches(&self, listing: &Listing) -> bool {
        let Some(year) = listing.year else {
            return false;
        };
        self.from.map_or(true, |from| year >= from) && self.to.map_or(true, |to| year <= to)
    }

    fn name(&self) -> &'static str {
        "YearRange"
    }
}

/// Inclusive price bounds
#[derive(Debug, Clone)]
pub struct PriceRangePredicate {
    min: f64,
    max: f64,
}

impl PriceRangePredicate {
    pub fn new(min: u64, max: u64) -> Self {
        Self {
            min: min as f64,
            max: max as f64,
        }
    }
}

impl ListingPredicate for PriceRangePredicate {
    fn matches(&self, listing: &Listing) -> bool {
        listing
            .price
            .is_some_and(|price| price >= self.min && price <= self.max)
    }

    fn name(&self) -> &'static str {
        "PriceRange"
    }
}

/// Sanitized mileage at or below the ceiling; unknown mileage fails
#[derive(Debug, Clone)]
pub struct MileageCeilingPredicate {
    max: u64,
}

impl MileageCeilingPredicate {
    pub fn new(max: u64) -> Self {
        Self { max }
    }
}

impl ListingPredicate for MileageCeilingPredicate {
    fn matches(&self, listing: &Listing) -> bool {
        listing
            .mileage
            .sanitized
            .is_some_and(|mileage| mileage <= self.max)
    }

    fn name(&self) -> &'static str {
        "MileageCeiling"
    }
}

/// Every required feature must appear within some listing feature
#[derive(Debug, Clone)]
pub struct FeaturesPredicate {
    required: Vec<String>,
}

impl FeaturesPredicate {
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }
}

impl ListingPredicate for FeaturesPredicate {
    fn matches(&self, listing: &Listing) -> bool {
        self.required
            .iter()
            .all(|feature| listing.has_feature(feature))
    }

    fn name(&self) -> &'static str {
        "Features"
    }
}

#[derive(Debug, Clone)]
pub struct ElectricPredicate;

impl ListingPredicate for ElectricPredicate {
    fn matches(&self, listing: &Listing) -> bool {
        listing.is_electric
    }

    fn name(&self) -> &'static str {
        "ElectricOnly"
    }
}

/// AND-composition of the predicates built from a `FilterCriteria`
pub struct FilterEngine {
    predicates: Vec<Box<dyn ListingPredicate>>,
}

impl FilterEngine {
    pub fn new(predicates: Vec<Box<dyn ListingPredicate>>) -> Self {
        Self { predicates }
    }

    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut predicates: Vec<Box<dyn ListingPredicate>> = Vec::new();

        let facets = [
            (Facet::Make, criteria.active_make()),
            (Facet::Model, criteria.active_model()),
            (Facet::FuelType, criteria.active_fuel_type()),
            (Facet::Transmission, criteria.active_transmission()),
            (Facet::SellerType, criteria.active_seller_type()),
        ];
        for (facet, value) in facets {
            if let Some(value) = value {
                predicates.push(Box::new(FacetPredicate::new(facet, value)));
            }
        }

        if criteria.year_from.is_some() || criteria.year_to.is_some() {
            predicates.push(Box::new(YearRangePredicate::new(
                criteria.year_from,
                criteria.year_to,
            )));
        }

        if let Some(range) = criteria.active_price_range() {
            predicates.push(Box::new(PriceRangePredicate::new(range.min, range.max)));
        }

        if let Some(max) = criteria.active_mileage_ceiling() {
            predicates.push(Box::new(MileageCeilingPredicate::new(max)));
        }

        if !criteria.features.is_empty() {
            predicates.push(Box::new(FeaturesPredicate::new(criteria.features.clone())));
        }

        if criteria.electric_only {
            predicates.push(Box::new(ElectricPredicate));
        }

        Self::new(predicates)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.predicates.iter().all(|p| p.matches(listing))
    }

    /// Keep the matching listings, order preserved
    pub fn apply<'a, I>(&self, listings: I) -> Vec<Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .cloned()
            .collect()
    }

    pub fn is_pass_through(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn active_predicates(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }
}
