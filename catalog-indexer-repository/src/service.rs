//! Search index service implementation.
//!
//! This module provides the main service for writing to the search index.
//! Each operation submits work through a `SearchIndexProvider` and then waits
//! until the backend reports the resulting task as published.

use std::sync::Arc;

use catalog_indexer_shared::{IndexSettings, ProductRecord};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument};

use crate::config::SearchIndexServiceConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{SaveRecordsSummary, TaskId, TaskStatus};

/// The main service for interacting with the search index.
///
/// This is the high-level API that application code should use. Every method
/// returns only after the backend has acknowledged the write, so callers can
/// treat each call as a blocking step.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use catalog_indexer_repository::{AlgoliaProvider, IndexConfig, SearchIndexService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = IndexConfig::new("APPID", "api-key", "products");
/// let provider = Arc::new(AlgoliaProvider::new(config)?);
/// let service = SearchIndexService::new(provider);
///
/// // Returns once the index is empty
/// service.clear_records().await?;
/// # Ok(())
/// # }
/// ```
pub struct SearchIndexService {
    provider: Arc<dyn SearchIndexProvider>,
    config: SearchIndexServiceConfig,
}

impl SearchIndexService {
    /// Create a new SearchIndexService with default configuration.
    ///
    /// The default configuration writes batches of up to 1000 records and waits
    /// indefinitely for each task.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchIndexServiceConfig::default(),
        }
    }

    /// Create a new SearchIndexService with custom configuration.
    pub fn with_config(
        provider: Arc<dyn SearchIndexProvider>,
        config: SearchIndexServiceConfig,
    ) -> Self {
        Self { provider, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchIndexServiceConfig {
        &self.config
    }

    fn validate_batch_size(&self) -> Result<(), SearchIndexError> {
        if self.config.max_batch_size == 0 {
            return Err(SearchIndexError::validation(
                "max_batch_size must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Remove every record from the index and wait for acknowledgment.
    #[instrument(skip(self))]
    pub async fn clear_records(&self) -> Result<(), SearchIndexError> {
        let task_id = self.provider.clear_records().await?;
        self.wait_for_task(task_id).await
    }

    /// Replace the index settings and wait for acknowledgment.
    ///
    /// Re-applying the same document leaves the index configuration unchanged.
    #[instrument(skip(self, settings))]
    pub async fn replace_settings(&self, settings: &IndexSettings) -> Result<(), SearchIndexError> {
        let task_id = self.provider.replace_settings(settings).await?;
        self.wait_for_task(task_id).await
    }

    /// Write all records and wait until every batch is acknowledged.
    ///
    /// Records are split into batches of at most `max_batch_size`, submitted in
    /// order. All batches are submitted before waiting on their tasks. The first
    /// rejected batch aborts the save; batches already submitted are not undone.
    ///
    /// # Returns
    ///
    /// * `Ok(SaveRecordsSummary)` - Batch count, acknowledged tasks and object IDs
    /// * `Err(SearchIndexError::ValidationError)` - If `max_batch_size` is zero
    /// * `Err(SearchIndexError)` - If a batch is rejected or a task wait fails
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub async fn save_records(
        &self,
        records: &[ProductRecord],
    ) -> Result<SaveRecordsSummary, SearchIndexError> {
        if records.is_empty() {
            return Ok(SaveRecordsSummary::default());
        }

        self.validate_batch_size()?;

        let mut summary = SaveRecordsSummary {
            total: records.len(),
            ..Default::default()
        };

        for chunk in records.chunks(self.config.max_batch_size) {
            let response = self.provider.save_records(chunk).await?;
            debug!(
                task_id = %response.task_id,
                count = chunk.len(),
                "Batch accepted"
            );
            summary.batches += 1;
            summary.task_ids.push(response.task_id);
            summary.object_ids.extend(response.object_ids);
        }

        for task_id in &summary.task_ids {
            self.wait_for_task(*task_id).await?;
        }

        info!(
            total = summary.total,
            batches = summary.batches,
            "Records saved"
        );
        Ok(summary)
    }

    /// Poll a task until the backend reports it as published.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Once the task is published
    /// * `Err(SearchIndexError::TaskTimeout)` - If `task_timeout` elapses first
    /// * `Err(SearchIndexError)` - If a status check fails
    pub async fn wait_for_task(&self, task_id: TaskId) -> Result<(), SearchIndexError> {
        let started = Instant::now();

        loop {
            match self.provider.task_status(task_id).await? {
                TaskStatus::Published => {
                    debug!(task_id = %task_id, "Task published");
                    return Ok(());
                }
                TaskStatus::NotPublished => {
                    if let Some(timeout) = self.config.task_timeout {
                        let waited = started.elapsed();
                        if waited >= timeout {
                            return Err(SearchIndexError::task_timeout(
                                task_id.0,
                                waited.as_millis() as u64,
                            ));
                        }
                    }
                    sleep(self.config.task_poll_interval).await;
                }
            }
        }
    }
}
