//! Error types for the catalog indexer.

use catalog_indexer_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while loading, transforming or publishing the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file is missing, unreadable or not a JSON array of objects.
    #[error("Data format error: {0}")]
    DataFormatError(String),

    /// A record lacks data the transform needs.
    #[error("Data validation error: {0}")]
    DataValidationError(String),

    /// The search backend rejected or failed a request.
    #[error("Remote request error: {0}")]
    RemoteError(#[from] SearchIndexError),
}

impl CatalogError {
    /// Create a data format error.
    pub fn data_format(msg: impl Into<String>) -> Self {
        Self::DataFormatError(msg.into())
    }

    /// Create a data validation error.
    pub fn data_validation(msg: impl Into<String>) -> Self {
        Self::DataValidationError(msg.into())
    }
}
