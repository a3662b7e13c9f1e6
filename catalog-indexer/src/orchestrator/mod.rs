//! Orchestrator module for the catalog indexer.
//!
//! Coordinates the loader, processor, configurator, and publisher components.

use std::time::Instant;
use tracing::{info, instrument};

use crate::configurator::IndexConfigurator;
use crate::errors::CatalogError;
use crate::loader::CatalogLoader;
use crate::processor::PriceProcessor;
use crate::publisher::CatalogPublisher;

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records read from the catalog file.
    pub records_loaded: usize,
    /// Records whose price was discounted.
    pub records_adjusted: usize,
    /// Records acknowledged by the index.
    pub records_saved: usize,
    /// Batch writes used to save the records.
    pub batches: usize,
}

/// Orchestrator that runs the job's steps in order.
///
/// The orchestrator:
/// - Loads the catalog
/// - Applies the category discount
/// - Applies the index settings
/// - Clears the index and saves the catalog
///
/// Each step starts only after the previous one has completed; the first error
/// ends the run.
pub struct Orchestrator {
    loader: CatalogLoader,
    processor: PriceProcessor,
    configurator: IndexConfigurator,
    publisher: CatalogPublisher,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        loader: CatalogLoader,
        processor: PriceProcessor,
        configurator: IndexConfigurator,
        publisher: CatalogPublisher,
    ) -> Self {
        Self {
            loader,
            processor,
            configurator,
            publisher,
        }
    }

    /// Run the job once.
    ///
    /// A malformed catalog or an invalid record ends the run before any request
    /// reaches the index.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<RunSummary, CatalogError> {
        let started = Instant::now();

        info!(path = %self.loader.path().display(), "Loading catalog");
        let mut catalog = self.loader.load().await?;
        info!(record_count = catalog.len(), "Catalog loaded");

        info!(
            category = %self.processor.category(),
            percentage = self.processor.percentage(),
            "Reducing prices in category"
        );
        let records_adjusted = self.processor.process(&mut catalog)?;
        info!(records_adjusted = records_adjusted, "Prices reduced");

        info!("Configuring index settings");
        self.configurator.configure().await?;

        info!(record_count = catalog.len(), "Publishing records to index");
        let saved = self.publisher.publish(&catalog).await?;

        let summary = RunSummary {
            records_loaded: catalog.len(),
            records_adjusted,
            records_saved: saved.total,
            batches: saved.batches,
        };

        info!(
            records_loaded = summary.records_loaded,
            records_adjusted = summary.records_adjusted,
            records_saved = summary.records_saved,
            batches = summary.batches,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Run complete"
        );
        Ok(summary)
    }
}
