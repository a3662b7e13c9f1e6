//! # Catalog Indexer
//!
//! Batch job that loads a product catalog from disk, discounts the prices of
//! one category, and publishes the result to an Algolia index together with
//! the index's relevance settings.
//!
//! ## Architecture
//!
//! The job is a strictly sequential pipeline:
//!
//! 1. **Loader**: Reads the catalog JSON file
//! 2. **Processor**: Applies the category discount to prices
//! 3. **Configurator**: Replaces the index settings
//! 4. **Publisher**: Clears the index and saves the catalog
//! 5. **Orchestrator**: Runs the steps in order
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`loader`]: Reads the catalog file
//! - [`processor`]: Price adjustment
//! - [`configurator`]: Index settings
//! - [`publisher`]: Writes records to the index
//! - [`orchestrator`]: Coordinates the run
//! - [`errors`]: Error types for the job

pub mod config;
pub mod configurator;
pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod publisher;

pub use config::{Dependencies, JobConfig};
pub use errors::CatalogError;

use thiserror::Error;

/// Errors that can end a run.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Catalog error.
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
