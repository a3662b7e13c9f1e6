//! # Catalog Indexer Repository
//!
//! This crate provides traits and implementations for interacting with the
//! remote search index. It includes definitions for errors, interfaces, and a
//! concrete implementation for Algolia's REST API.

pub mod algolia;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod service;
pub mod types;
pub mod utils;

pub use algolia::{AlgoliaProvider, IndexConfig};
pub use config::SearchIndexServiceConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use service::SearchIndexService;
pub use types::{BatchAction, SaveRecordsResponse, SaveRecordsSummary, TaskId, TaskStatus};
pub use utils::batch_action;
