//! Configuration and dependency wiring for the catalog indexer.

mod dependencies;
mod job_config;

pub use dependencies::Dependencies;
pub use job_config::{
    JobConfig, DEFAULT_CATEGORY, DEFAULT_INPUT_PATH, DEFAULT_PERCENTAGE,
};
