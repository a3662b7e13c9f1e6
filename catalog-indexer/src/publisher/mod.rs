//! Publisher module for the catalog indexer.
//!
//! Replaces the contents of the search index with the processed catalog.

use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::errors::CatalogError;
use catalog_indexer_repository::{SaveRecordsSummary, SearchIndexService};
use catalog_indexer_shared::ProductRecord;

/// Publisher that swaps the index contents for the catalog.
///
/// Publishing is not transactional: the index is cleared first, then the
/// records are saved. If the save fails, the index stays empty or partially
/// populated until the next successful run.
pub struct CatalogPublisher {
    service: Arc<SearchIndexService>,
}

impl CatalogPublisher {
    /// Create a new publisher writing through `service`.
    pub fn new(service: Arc<SearchIndexService>) -> Self {
        Self { service }
    }

    /// Clear the index, then save every record.
    ///
    /// Each step waits for the backend's acknowledgment before the next begins.
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub async fn publish(
        &self,
        records: &[ProductRecord],
    ) -> Result<SaveRecordsSummary, CatalogError> {
        self.clear().await?;
        self.save(records).await
    }

    /// Remove every record from the index.
    pub async fn clear(&self) -> Result<(), CatalogError> {
        debug!("Clearing index records");

        self.service.clear_records().await.map_err(|e| {
            error!(error = %e, "Failed to clear index records");
            CatalogError::from(e)
        })?;

        info!("Index records cleared");
        Ok(())
    }

    /// Save all records to the index.
    pub async fn save(&self, records: &[ProductRecord]) -> Result<SaveRecordsSummary, CatalogError> {
        let count = records.len();

        match self.service.save_records(records).await {
            Ok(summary) => {
                info!(
                    count = summary.total,
                    batches = summary.batches,
                    "Records added to index"
                );
                Ok(summary)
            }
            Err(e) => {
                error!(error = %e, count = count, "Failed to save records");
                warn!("Index was cleared before the failed save and may be empty or partially populated");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_indexer_repository::{
        SaveRecordsResponse, SearchIndexError, SearchIndexProvider, TaskId, TaskStatus,
    };
    use catalog_indexer_shared::IndexSettings;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

    /// Mock search provider for testing.
    struct MockSearchProvider {
        cleared: AtomicBool,
        saved_count: AtomicUsize,
        next_task: AtomicU64,
        reject_save: bool,
    }

    impl MockSearchProvider {
        fn new() -> Self {
            Self {
                cleared: AtomicBool::new(false),
                saved_count: AtomicUsize::new(0),
                next_task: AtomicU64::new(1),
                reject_save: false,
            }
        }

        fn rejecting_saves() -> Self {
            Self {
                reject_save: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SearchIndexProvider for MockSearchProvider {
        async fn clear_records(&self) -> Result<TaskId, SearchIndexError> {
            self.cleared.store(true, Ordering::SeqCst);
            Ok(TaskId(self.next_task.fetch_add(1, Ordering::SeqCst)))
        }

        async fn replace_settings(
            &self,
            _settings: &IndexSettings,
        ) -> Result<TaskId, SearchIndexError> {
            Ok(TaskId(self.next_task.fetch_add(1, Ordering::SeqCst)))
        }

        async fn save_records(
            &self,
            records: &[ProductRecord],
        ) -> Result<SaveRecordsResponse, SearchIndexError> {
            if self.reject_save {
                return Err(SearchIndexError::request(400, "Quota exceeded"));
            }
            self.saved_count.fetch_add(records.len(), Ordering::SeqCst);
            Ok(SaveRecordsResponse {
                task_id: TaskId(self.next_task.fetch_add(1, Ordering::SeqCst)),
                object_ids: Vec::new(),
            })
        }

        async fn task_status(&self, _task_id: TaskId) -> Result<TaskStatus, SearchIndexError> {
            Ok(TaskStatus::Published)
        }
    }

    fn records() -> Vec<ProductRecord> {
        serde_json::from_value(json!([
            { "objectID": "1", "price": 80, "categories": ["Cameras & Camcorders"] },
            { "objectID": "2", "price": 15.5, "categories": ["Audio"] }
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_publish_clears_then_saves() {
        let provider = Arc::new(MockSearchProvider::new());
        let publisher = CatalogPublisher::new(Arc::new(SearchIndexService::new(provider.clone())));

        let summary = publisher.publish(&records()).await.unwrap();

        assert!(provider.cleared.load(Ordering::SeqCst));
        assert_eq!(provider.saved_count.load(Ordering::SeqCst), 2);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.batches, 1);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_clear() {
        let provider = Arc::new(MockSearchProvider::rejecting_saves());
        let publisher = CatalogPublisher::new(Arc::new(SearchIndexService::new(provider.clone())));

        let err = publisher.publish(&records()).await.unwrap_err();

        assert!(provider.cleared.load(Ordering::SeqCst));
        assert_eq!(provider.saved_count.load(Ordering::SeqCst), 0);
        assert!(matches!(
            err,
            CatalogError::RemoteError(SearchIndexError::RequestError { status: 400, .. })
        ));
    }
}
