//! Product record types for the catalog.
//!
//! A product record is an open-ended JSON object. Only `categories` and `price`
//! carry meaning for the job; every other field is passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered, in-memory product catalog.
pub type Catalog = Vec<ProductRecord>;

/// A single product entry as read from the catalog file.
///
/// The record wraps the raw JSON object so that fields this job does not know
/// about survive the load/transform/upload cycle unchanged.
///
/// # Fields used by the job
///
/// - `categories`: array of category names the product belongs to
/// - `price`: numeric price in currency units
/// - `objectID`: the search backend's identity for the record, if present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord(Map<String, Value>);

impl ProductRecord {
    /// Name of the field holding the category list.
    pub const CATEGORIES_FIELD: &'static str = "categories";
    /// Name of the field holding the price.
    pub const PRICE_FIELD: &'static str = "price";
    /// Name of the field holding the backend object identifier.
    pub const OBJECT_ID_FIELD: &'static str = "objectID";

    /// Create a record from a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Borrow the underlying fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record and return the underlying fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// The backend object identifier, when the record carries a string `objectID`.
    pub fn object_id(&self) -> Option<&str> {
        self.0.get(Self::OBJECT_ID_FIELD).and_then(Value::as_str)
    }

    /// Whether the record carries an `objectID` of any JSON type other than `null`.
    ///
    /// The backend accepts numeric identifiers as well as strings.
    pub fn has_object_id(&self) -> bool {
        self.0
            .get(Self::OBJECT_ID_FIELD)
            .is_some_and(|id| !id.is_null())
    }

    /// Iterate over the record's category names.
    ///
    /// Yields nothing when `categories` is absent or not an array. Non-string
    /// entries are skipped.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0
            .get(Self::CATEGORIES_FIELD)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Whether the record lists `category` among its categories (exact match).
    pub fn in_category(&self, category: &str) -> bool {
        self.categories().any(|c| c == category)
    }

    /// The raw `price` value, if present.
    pub fn price(&self) -> Option<&Value> {
        self.0.get(Self::PRICE_FIELD)
    }

    /// Replace the `price` field, leaving every other field untouched.
    pub fn set_price(&mut self, price: impl Into<Value>) {
        self.0.insert(Self::PRICE_FIELD.to_string(), price.into());
    }
}

impl From<Map<String, Value>> for ProductRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
