//! # Catalog Indexer Shared
//!
//! This crate defines shared data structures used across the catalog indexer.
//! It includes the open-ended product record, the in-memory catalog, and the
//! typed index settings document sent to the search backend.

pub mod types;

pub use types::index_settings::{
    FacetOrdering, FacetValuesOrder, FacetsOrder, IndexSettings, RenderingContent,
    SortRemainingBy,
};
pub use types::product_record::{Catalog, ProductRecord};
