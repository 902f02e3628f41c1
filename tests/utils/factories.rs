/// Test data factories using builder pattern
///
/// Rows mirror what the listing store returns: loosely typed JSON objects.
use carmarket_lib::modules::listing::RawListing;
use serde_json::{json, Map, Value};

pub struct RawListingFactory {
    fields: Map<String, Value>,
}

impl RawListingFactory {
    pub fn new(id: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), id.into());
        Self { fields }
    }

    /// A row with no id at all
    pub fn without_id() -> Self {
        Self { fields: Map::new() }
    }

    pub fn bmw(id: impl Into<Value>) -> Self {
        Self::new(id)
            .with("make", "BMW")
            .with("model", "X5")
            .with("year", 2019)
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn with_make(self, make: &str) -> Self {
        self.with("make", make)
    }

    pub fn with_price(self, price: impl Into<Value>) -> Self {
        self.with("price", price)
    }

    pub fn with_mileage(self, mileage: impl Into<Value>) -> Self {
        self.with("mileage", mileage)
    }

    pub fn with_created(self, created: &str) -> Self {
        self.with("created_date", created)
    }

    pub fn with_features(self, features: Value) -> Self {
        self.with("features", features)
    }

    pub fn electric(self) -> Self {
        self.with("fuel_type", "Electric").with("is_electric", true)
    }

    /// Vehicle fields nested under `data`, as some store views return them
    pub fn nested(self) -> Self {
        let mut fields = self.fields;
        let id = fields.remove("id");
        let mut outer = Map::new();
        if let Some(id) = id {
            outer.insert("id".to_string(), id);
        }
        outer.insert("data".to_string(), Value::Object(fields));
        Self { fields: outer }
    }

    pub fn build(self) -> RawListing {
        RawListing::new(self.fields)
    }
}

/// The three-row sample used throughout the pipeline tests
pub fn sample_rows() -> Vec<RawListing> {
    vec![
        RawListingFactory::new(1)
            .with_make("BMW")
            .with_price(30000)
            .with_mileage("50,000 km")
            .build(),
        RawListingFactory::new(2)
            .with_make("BMW")
            .with_price(80000)
            .with_mileage("10000")
            .build(),
        RawListingFactory::new(1).with_make("DUP").build(),
    ]
}

pub fn mixed_inventory() -> Vec<RawListing> {
    vec![
        RawListingFactory::bmw(1)
            .with_price(30000)
            .with_mileage("50,000 km")
            .with_created("2024-03-01T10:00:00Z")
            .with_features(json!(["Sunroof", "Navigation System"]))
            .with("body_type", "SUV")
            .build(),
        RawListingFactory::new(2)
            .with_make("Tesla")
            .with("model", "Model 3")
            .with_price(45000)
            .with_mileage(12000)
            .with_created("2024-03-05T10:00:00Z")
            .electric()
            .build(),
        RawListingFactory::new(3)
            .with_make("Audi")
            .with("model", "A4")
            .with_price(65000)
            .with_mileage("80000")
            .with_created("2024-02-20")
            .with_features(json!("Sunroof"))
            .build(),
        RawListingFactory::new(4)
            .with_make("Toyota")
            .with("model", "Corolla")
            .with_mileage("n/a")
            .build(),
    ]
}
