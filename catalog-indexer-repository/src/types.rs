//! Request and response types for search index operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an asynchronous write task on the backend.
///
/// Every write (clear, settings, batch) returns a task; the write is acknowledged
/// once the task reports [`TaskStatus::Published`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a backend write task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// The write is applied and visible.
    Published,
    /// The write is still pending.
    NotPublished,
}

/// Action applied to a single record within a batch write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchAction {
    /// Add the record; the backend assigns an object ID.
    AddObject,
    /// Replace the record identified by its `objectID`, creating it if absent.
    UpdateObject,
}

/// Response to a single batch write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaveRecordsResponse {
    /// Task to wait on for acknowledgment.
    #[serde(rename = "taskID")]
    pub task_id: TaskId,
    /// Object IDs of the written records, in submission order.
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Vec<String>,
}

/// Summary of a full save across one or more batches.
///
/// All tasks listed here have been acknowledged by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRecordsSummary {
    /// Total number of records submitted.
    pub total: usize,
    /// Number of batch requests sent.
    pub batches: usize,
    /// Acknowledged task IDs, one per batch.
    pub task_ids: Vec<TaskId>,
    /// Object IDs reported by the backend, in submission order.
    pub object_ids: Vec<String>,
}
