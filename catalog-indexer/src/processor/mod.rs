//! Processor module for the catalog indexer.
//!
//! Applies the category discount to product prices.

mod price_processor;

pub use price_processor::{discounted_price, PriceProcessor};
