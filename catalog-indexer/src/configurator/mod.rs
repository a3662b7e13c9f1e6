//! Configurator module for the catalog indexer.
//!
//! Applies the catalog's relevance settings to the search index.

use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::errors::CatalogError;
use catalog_indexer_repository::algolia::catalog_index_settings;
use catalog_indexer_repository::SearchIndexService;
use catalog_indexer_shared::IndexSettings;

/// Submits a fixed settings document to the search index.
///
/// The settings are not derived from the catalog. Submitting the same document
/// again leaves the index configuration unchanged.
pub struct IndexConfigurator {
    service: Arc<SearchIndexService>,
    settings: IndexSettings,
}

impl IndexConfigurator {
    /// Create a configurator applying the product catalog settings.
    pub fn new(service: Arc<SearchIndexService>) -> Self {
        Self::with_settings(service, catalog_index_settings())
    }

    /// Create a configurator applying custom settings.
    pub fn with_settings(service: Arc<SearchIndexService>, settings: IndexSettings) -> Self {
        Self { service, settings }
    }

    /// The settings this configurator applies.
    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    /// Replace the index settings and wait for acknowledgment.
    #[instrument(skip(self))]
    pub async fn configure(&self) -> Result<(), CatalogError> {
        match self.service.replace_settings(&self.settings).await {
            Ok(()) => {
                info!(
                    searchable_attributes = ?self.settings.searchable_attributes,
                    attributes_for_faceting = ?self.settings.attributes_for_faceting,
                    "Index settings applied"
                );
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to apply index settings");
                Err(e.into())
            }
        }
    }
}
