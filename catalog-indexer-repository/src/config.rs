//! Configuration types for the SearchIndexService.

use std::time::Duration;

/// Default number of records per batch write.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// Default delay between task status checks.
pub const DEFAULT_TASK_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Configuration for the SearchIndexService.
///
/// Controls how records are split into batch writes and how the service waits for
/// the backend to acknowledge each write.
#[derive(Debug, Clone)]
pub struct SearchIndexServiceConfig {
    /// Maximum number of records sent in a single batch write.
    ///
    /// Larger catalogs are split into several batches. Defaults to 1000.
    pub max_batch_size: usize,

    /// Delay between two task status checks while waiting for acknowledgment.
    pub task_poll_interval: Duration,

    /// Upper bound on how long to wait for a single task.
    ///
    /// `None` waits until the backend publishes the task.
    pub task_timeout: Option<Duration>,
}

impl Default for SearchIndexServiceConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            task_poll_interval: DEFAULT_TASK_POLL_INTERVAL,
            task_timeout: None,
        }
    }
}

impl SearchIndexServiceConfig {
    /// Create a config with a custom batch size.
    ///
    /// # Arguments
    ///
    /// * `max_batch_size` - Maximum number of records per batch write
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size,
            ..Self::default()
        }
    }

    /// Set the delay between task status checks.
    pub fn task_poll_interval(mut self, interval: Duration) -> Self {
        self.task_poll_interval = interval;
        self
    }

    /// Bound the wait for each task.
    pub fn task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }
}
