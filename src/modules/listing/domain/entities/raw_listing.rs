use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::listing::ListingId;

/// A vehicle row exactly as the listing store returned it
///
/// Field presence and shape are not guaranteed. Some stores nest the
/// vehicle fields under a `data` object; [`RawListing::flattened`] lifts
/// them to the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawListing(Map<String, Value>);

impl RawListing {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Accepts only JSON objects; anything else is not a record
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|v| !v.is_null())
    }

    /// Merge a nested `data` object into the record, top-level fields winning
    pub fn flattened(&self) -> RawListing {
        let Some(Value::Object(nested)) = self.0.get("data") else {
            return self.clone();
        };

        let mut merged = nested.clone();
        for (key, value) in &self.0 {
            if key == "data" {
                continue;
            }
            merged.insert(key.clone(), value.clone());
        }
        RawListing(merged)
    }
}

impl From<Map<String, Value>> for RawListing {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Anything the dedup stage can key on
pub trait HasListingId {
    fn listing_id(&self) -> Option<ListingId>;
}

impl HasListingId for RawListing {
    fn listing_id(&self) -> Option<ListingId> {
        self.get("id").and_then(ListingId::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawListing {
        RawListing::from_value(value).unwrap()
    }

    #[test]
    fn rejects_non_objects() {
        assert!(RawListing::from_value(json!([1, 2])).is_none());
        assert!(RawListing::from_value(json!("car")).is_none());
    }

    #[test]
    fn null_fields_read_as_absent() {
        let record = raw(json!({"id": 1, "make": null}));
        assert!(record.get("make").is_none());
        assert!(record.get("id").is_some());
    }

    #[test]
    fn flattening_prefers_top_level_fields() {
        let record = raw(json!({
            "id": "a1",
            "price": 1000,
            "data": {"make": "Audi", "price": 999}
        }));

        let flat = record.flattened();
        assert_eq!(flat.get("make"), Some(&json!("Audi")));
        assert_eq!(flat.get("price"), Some(&json!(1000)));
        assert!(flat.get("data").is_none());
    }

    #[test]
    fn listing_id_accepts_strings_and_numbers() {
        assert_eq!(
            raw(json!({"id": 7})).listing_id(),
            Some(ListingId::new("7"))
        );
        assert_eq!(
            raw(json!({"id": "abc"})).listing_id(),
            Some(ListingId::new("abc"))
        );
        assert_eq!(raw(json!({"make": "BMW"})).listing_id(), None);
    }
}
