//! Search index error types.
//!
//! This module defines the unified error type for all search index operations,
//! including transport failures, backend rejections, and client-side validation.

use thiserror::Error;

/// Unified errors from search index operations.
///
/// Used by the `SearchIndexProvider` trait and `SearchIndexService` for all search index
/// operations. Backend rejections keep the HTTP status and the message returned by the
/// backend so callers can log the payload as-is.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Validation error (e.g., invalid credentials format, zero batch size).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to reach the search index backend.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The backend rejected the request.
    #[error("Request rejected with status {status}: {message}")]
    RequestError { status: u16, message: String },

    /// Failed to parse response from search index backend.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the search index backend.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A task was not acknowledged within the configured wait.
    #[error("Task {task_id} not published after {waited_ms}ms")]
    TaskTimeout { task_id: u64, waited_ms: u64 },
}

impl SearchIndexError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a request error from a backend status and message.
    pub fn request(status: u16, message: impl Into<String>) -> Self {
        Self::RequestError {
            status,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a task timeout error.
    pub fn task_timeout(task_id: u64, waited_ms: u64) -> Self {
        Self::TaskTimeout { task_id, waited_ms }
    }
}
