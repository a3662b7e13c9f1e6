//! Algolia implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! on top of Algolia's REST API, and the settings document for the catalog index.

mod index_config;
mod provider;

pub use index_config::{catalog_index_settings, IndexConfig, PRICE_RANGE_ORDER, RATING_ORDER};
pub use provider::AlgoliaProvider;
