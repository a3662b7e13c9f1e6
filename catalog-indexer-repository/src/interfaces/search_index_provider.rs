//! Search index provider trait definition.
//!
//! This module defines the abstract interface for remote search index operations,
//! allowing for different backend implementations and for mocks in tests.

use async_trait::async_trait;
use catalog_indexer_shared::{IndexSettings, ProductRecord};

use crate::errors::SearchIndexError;
use crate::types::{SaveRecordsResponse, TaskId, TaskStatus};

/// Abstracts the underlying search index implementation.
///
/// Write operations only submit work: they return the backend task that must be
/// published before the write is visible. `SearchIndexService` layers the
/// "submit and wait for acknowledgment" contract on top of this trait.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error handling across
/// different backend implementations.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Remove every record from the index, keeping its settings.
    ///
    /// # Returns
    ///
    /// * `Ok(TaskId)` - The task acknowledging the clear
    /// * `Err(SearchIndexError)` - If the backend rejects the request
    async fn clear_records(&self) -> Result<TaskId, SearchIndexError>;

    /// Replace the index settings with `settings`.
    ///
    /// Settings not present in the document keep the backend's current value.
    ///
    /// # Arguments
    ///
    /// * `settings` - The settings document to apply
    ///
    /// # Returns
    ///
    /// * `Ok(TaskId)` - The task acknowledging the settings change
    /// * `Err(SearchIndexError)` - If the backend rejects the request
    async fn replace_settings(&self, settings: &IndexSettings) -> Result<TaskId, SearchIndexError>;

    /// Write a single batch of records.
    ///
    /// Callers are responsible for keeping the batch within the backend's limits.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to write, in order
    ///
    /// # Returns
    ///
    /// * `Ok(SaveRecordsResponse)` - The batch task and the written object IDs
    /// * `Err(SearchIndexError)` - If the backend rejects the batch
    async fn save_records(
        &self,
        records: &[ProductRecord],
    ) -> Result<SaveRecordsResponse, SearchIndexError>;

    /// Fetch the current status of a write task.
    async fn task_status(&self, task_id: TaskId) -> Result<TaskStatus, SearchIndexError>;
}
