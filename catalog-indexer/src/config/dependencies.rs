//! Dependency initialization and wiring for the catalog indexer.

use std::sync::Arc;
use tracing::info;

use crate::config::JobConfig;
use crate::configurator::IndexConfigurator;
use crate::loader::CatalogLoader;
use crate::orchestrator::Orchestrator;
use crate::processor::PriceProcessor;
use crate::publisher::CatalogPublisher;
use crate::IndexingError;
use catalog_indexer_repository::{AlgoliaProvider, SearchIndexProvider, SearchIndexService};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies against the Algolia index named in `config`.
    ///
    /// No request is sent to the backend here; the provider only validates the
    /// host URL and credential format.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the provider cannot be created
    pub fn new(config: JobConfig) -> Result<Self, IndexingError> {
        info!(
            app_id = %config.index.app_id,
            index = %config.index.index_name,
            input_path = %config.input_path.display(),
            category = %config.category,
            percentage = config.percentage,
            batch_size = config.service.max_batch_size,
            "Initializing dependencies"
        );

        let provider = AlgoliaProvider::new(config.index.clone()).map_err(|e| {
            IndexingError::config(format!("Failed to create Algolia provider: {}", e))
        })?;

        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Wire the pipeline around an already constructed provider.
    pub fn with_provider(config: JobConfig, provider: Arc<dyn SearchIndexProvider>) -> Self {
        let service = Arc::new(SearchIndexService::with_config(provider, config.service));

        let loader = CatalogLoader::new(config.input_path);
        let processor = PriceProcessor::new(config.category, config.percentage);
        let configurator = IndexConfigurator::new(service.clone());
        let publisher = CatalogPublisher::new(service);

        let orchestrator = Orchestrator::new(loader, processor, configurator, publisher);

        Self { orchestrator }
    }
}
