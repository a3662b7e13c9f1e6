//! Price processor implementation.
//!
//! Discounts the price of every record in a target category.

use catalog_indexer_shared::ProductRecord;
use serde_json::{Number, Value};
use tracing::{debug, instrument};

use crate::errors::CatalogError;

/// Compute a discounted price.
///
/// The discounted amount is rounded to two decimal places and then floored to a
/// whole number, in that order. Rounding works on the exact decimal expansion of
/// the binary value, so a result like `79.996` rounds up to `80.00` and floors to `80`.
///
/// # Example
///
/// ```
/// use catalog_indexer::processor::discounted_price;
///
/// assert_eq!(discounted_price(100.0, 20.0), 80.0);
/// assert_eq!(discounted_price(99.99, 20.0), 79.0);
/// ```
pub fn discounted_price(price: f64, percentage: f64) -> f64 {
    let discounted = price * (1.0 - percentage / 100.0);
    round_to_cents(discounted).floor()
}

fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Encode a whole-number price as a JSON number.
///
/// Values inside the `i64` or `u64` range are written as integers; larger ones
/// keep their exact float value, which is still integral.
fn integer_price(price: f64) -> Option<Value> {
    if price >= i64::MIN as f64 && price < i64::MAX as f64 {
        Some(Value::from(price as i64))
    } else if price >= 0.0 && price < u64::MAX as f64 {
        Some(Value::from(price as u64))
    } else {
        Number::from_f64(price).map(Value::Number)
    }
}

/// Processor that applies a percentage discount to one category.
///
/// Only the `price` field of records listing the category is rewritten; every
/// other field and every other record is left as loaded.
#[derive(Debug, Clone)]
pub struct PriceProcessor {
    category: String,
    percentage: f64,
}

impl PriceProcessor {
    /// Create a processor discounting `category` by `percentage` percent.
    ///
    /// `percentage` is expected to lie within `[0, 100]`.
    pub fn new(category: impl Into<String>, percentage: f64) -> Self {
        Self {
            category: category.into(),
            percentage,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Discount every record in the target category, in place.
    ///
    /// All matching records are validated before any price is written, so on
    /// error the catalog is left untouched. Running the processor again over its
    /// own output applies the discount again.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of records whose price was rewritten
    /// * `Err(CatalogError::DataValidationError)` - If a matching record has no numeric price
    #[instrument(skip(self, catalog), fields(record_count = catalog.len(), category = %self.category))]
    pub fn process(&self, catalog: &mut [ProductRecord]) -> Result<usize, CatalogError> {
        let mut updates = Vec::new();

        for (index, record) in catalog.iter().enumerate() {
            if !record.in_category(&self.category) {
                continue;
            }
            let price = Self::numeric_price(index, record)?;
            let discounted = integer_price(discounted_price(price, self.percentage))
                .ok_or_else(|| {
                    CatalogError::data_validation(format!(
                        "Record {}{} has a price that cannot be discounted: {}",
                        index,
                        describe(record),
                        price
                    ))
                })?;
            updates.push((index, discounted));
        }

        let adjusted = updates.len();
        for (index, price) in updates {
            catalog[index].set_price(price);
        }

        debug!(adjusted = adjusted, "Applied category discount");
        Ok(adjusted)
    }

    fn numeric_price(index: usize, record: &ProductRecord) -> Result<f64, CatalogError> {
        match record.price() {
            Some(value) => value.as_f64().ok_or_else(|| {
                CatalogError::data_validation(format!(
                    "Record {}{} has a non-numeric price: {}",
                    index,
                    describe(record),
                    value
                ))
            }),
            None => Err(CatalogError::data_validation(format!(
                "Record {}{} has no price",
                index,
                describe(record)
            ))),
        }
    }
}

fn describe(record: &ProductRecord) -> String {
    record
        .object_id()
        .map(|id| format!(" (objectID={})", id))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CAMERAS: &str = "Cameras & Camcorders";

    /// Whether `value` is the integer JSON number `expected`.
    fn is_integer(value: Option<&Value>, expected: i64) -> bool {
        value.and_then(Value::as_i64) == Some(expected)
    }

    fn catalog(value: Value) -> Vec<ProductRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_discounted_price_scenarios() {
        assert_eq!(discounted_price(100.0, 20.0), 80.0);
        assert_eq!(discounted_price(99.99, 20.0), 79.0);
        assert_eq!(discounted_price(19.99, 0.0), 19.0);
        assert_eq!(discounted_price(549.99, 100.0), 0.0);
    }

    #[test]
    fn test_rounding_happens_before_floor() {
        // 99.995 * 0.8 is just under 80; rounding to cents reaches 80.00 first.
        assert_eq!(discounted_price(99.995, 20.0), 80.0);
        assert_eq!(discounted_price(99.98, 20.0), 79.0);
    }

    #[test]
    fn test_matching_records_are_discounted() {
        let mut products = catalog(json!([
            { "objectID": "1", "price": 100.00, "categories": [CAMERAS] },
            { "objectID": "2", "price": 99.99, "categories": ["Audio", CAMERAS] }
        ]));

        let adjusted = PriceProcessor::new(CAMERAS, 20.0)
            .process(&mut products)
            .unwrap();

        assert_eq!(adjusted, 2);
        assert!(is_integer(products[0].price(), 80));
        assert!(is_integer(products[1].price(), 79));
        assert_eq!(products[1].fields()["categories"], json!(["Audio", CAMERAS]));
    }

    #[test]
    fn test_non_matching_records_are_untouched() {
        let original = catalog(json!([
            { "objectID": "1", "price": 99.99, "categories": ["Audio"] },
            { "objectID": "2", "price": 12.345, "categories": ["Cameras"] },
            { "objectID": "3", "name": "No categories", "price": 5.5 },
            { "objectID": "4", "categories": ["TV & Home Theater"] }
        ]));
        let mut products = original.clone();

        let adjusted = PriceProcessor::new(CAMERAS, 20.0)
            .process(&mut products)
            .unwrap();

        assert_eq!(adjusted, 0);
        assert_eq!(products, original);
        assert_eq!(
            products[0].price().and_then(Value::as_f64).map(f64::to_bits),
            Some(99.99f64.to_bits())
        );
    }

    #[test]
    fn test_length_order_and_other_fields_preserved() {
        let mut products = catalog(json!([
            { "objectID": "a", "price": 10, "categories": ["Audio"] },
            { "objectID": "b", "price": 250.5, "categories": [CAMERAS], "brand": "Canon", "rating": 5 },
            { "objectID": "c", "price": 3, "categories": [CAMERAS] }
        ]));

        PriceProcessor::new(CAMERAS, 20.0)
            .process(&mut products)
            .unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.object_id().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(
            serde_json::to_value(&products[1]).unwrap(),
            json!({ "objectID": "b", "price": 200, "categories": [CAMERAS], "brand": "Canon", "rating": 5 })
        );
        assert!(is_integer(products[2].price(), 2));
    }

    #[test]
    fn test_same_inputs_give_same_outputs() {
        let input = catalog(json!([
            { "price": 87.65, "categories": [CAMERAS] },
            { "price": 1.23, "categories": ["Audio"] }
        ]));
        let processor = PriceProcessor::new(CAMERAS, 15.0);

        let mut first = input.clone();
        let mut second = input.clone();
        processor.process(&mut first).unwrap();
        processor.process(&mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_reapplying_compounds_discount() {
        let mut products = catalog(json!([{ "price": 100, "categories": [CAMERAS] }]));
        let processor = PriceProcessor::new(CAMERAS, 20.0);

        processor.process(&mut products).unwrap();
        processor.process(&mut products).unwrap();

        assert!(is_integer(products[0].price(), 64));
    }

    #[test]
    fn test_integer_price_input() {
        let mut products = catalog(json!([{ "price": 50, "categories": [CAMERAS] }]));

        PriceProcessor::new(CAMERAS, 20.0)
            .process(&mut products)
            .unwrap();

        assert!(is_integer(products[0].price(), 40));
    }

    #[test]
    fn test_missing_price_on_matching_record_fails() {
        let original = catalog(json!([
            { "objectID": "ok", "price": 100, "categories": [CAMERAS] },
            { "objectID": "broken", "categories": [CAMERAS] }
        ]));
        let mut products = original.clone();

        let err = PriceProcessor::new(CAMERAS, 20.0)
            .process(&mut products)
            .unwrap_err();

        match err {
            CatalogError::DataValidationError(msg) => {
                assert!(msg.contains("Record 1"));
                assert!(msg.contains("objectID=broken"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        // Nothing is written when validation fails.
        assert_eq!(products, original);
    }

    #[test]
    fn test_non_numeric_price_on_matching_record_fails() {
        let mut products = catalog(json!([{ "price": "99.99", "categories": [CAMERAS] }]));

        let result = PriceProcessor::new(CAMERAS, 20.0).process(&mut products);

        assert!(matches!(result, Err(CatalogError::DataValidationError(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let mut products: Vec<ProductRecord> = Vec::new();
        assert_eq!(
            PriceProcessor::new(CAMERAS, 20.0)
                .process(&mut products)
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_prices_beyond_i64_are_not_clamped() {
        let mut products = catalog(json!([
            { "objectID": "u64", "price": 1.0e19, "categories": [CAMERAS] },
            { "objectID": "f64", "price": 2.0e19, "categories": [CAMERAS] }
        ]));

        PriceProcessor::new(CAMERAS, 0.0)
            .process(&mut products)
            .unwrap();

        assert_eq!(
            products[0].price().and_then(Value::as_u64),
            Some(10_000_000_000_000_000_000)
        );
        let large = products[1].price().and_then(Value::as_f64).unwrap();
        assert_eq!(large, 2.0e19);
        assert_eq!(large.fract(), 0.0);
    }
}
