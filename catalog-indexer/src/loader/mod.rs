//! Loader module for the catalog indexer.
//!
//! Reads the product catalog from a JSON file.

use std::path::{Path, PathBuf};

use catalog_indexer_shared::{Catalog, ProductRecord};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::CatalogError;

/// Loader that reads a catalog file into memory.
///
/// The file must hold a single top-level JSON array whose elements are all
/// objects. Records are returned in file order.
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    /// Create a loader for the catalog at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog file.
    ///
    /// # Returns
    ///
    /// * `Ok(Catalog)` - The records, in file order
    /// * `Err(CatalogError::DataFormatError)` - If the file is missing, unreadable,
    ///   not UTF-8, or not a JSON array of objects
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogError::data_format(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let catalog = Self::parse(&contents)?;
        debug!(record_count = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Parse catalog file contents.
    pub fn parse(contents: &str) -> Result<Catalog, CatalogError> {
        let value: Value = serde_json::from_str(contents)
            .map_err(|e| CatalogError::data_format(format!("Invalid JSON: {}", e)))?;

        let Value::Array(items) = value else {
            return Err(CatalogError::data_format(
                "Expected a top-level JSON array of product records",
            ));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(ProductRecord::new(fields)),
                other => Err(CatalogError::data_format(format!(
                    "Record {} is not a JSON object (found {})",
                    index,
                    json_type(&other)
                ))),
            })
            .collect()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
