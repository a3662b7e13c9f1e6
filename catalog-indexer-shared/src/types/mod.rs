//! This module defines the core data structures used across the catalog indexer.
//! It re-exports specific types like `ProductRecord` and `IndexSettings`.

pub mod index_settings;
pub mod product_record;

pub use index_settings::IndexSettings;
pub use product_record::{Catalog, ProductRecord};
