//! Job configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use catalog_indexer_repository::{IndexConfig, SearchIndexServiceConfig};

use crate::IndexingError;

/// Default catalog file location.
pub const DEFAULT_INPUT_PATH: &str = "./data/products.json";

/// Default category receiving the discount.
pub const DEFAULT_CATEGORY: &str = "Cameras & Camcorders";

/// Default discount, in percent.
pub const DEFAULT_PERCENTAGE: f64 = 20.0;

const APP_ID_VAR: &str = "ALGOLIA_APP_ID";
const API_KEY_VAR: &str = "ALGOLIA_API_KEY";
const INDEX_VAR: &str = "ALGOLIA_INDEX";
const HOST_VAR: &str = "ALGOLIA_HOST";
const BATCH_SIZE_VAR: &str = "ALGOLIA_BATCH_SIZE";
const POLL_INTERVAL_VAR: &str = "ALGOLIA_TASK_POLL_INTERVAL_MS";
const TASK_TIMEOUT_VAR: &str = "ALGOLIA_TASK_TIMEOUT_SECS";
const INPUT_PATH_VAR: &str = "CATALOG_INPUT_PATH";
const CATEGORY_VAR: &str = "DISCOUNT_CATEGORY";
const PERCENTAGE_VAR: &str = "DISCOUNT_PERCENTAGE";

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Target index and credentials.
    pub index: IndexConfig,
    /// Batching and task wait behavior.
    pub service: SearchIndexServiceConfig,
    /// Catalog file to load.
    pub input_path: PathBuf,
    /// Category whose prices are discounted.
    pub category: String,
    /// Discount in percent, within `[0, 100]`.
    pub percentage: f64,
}

impl JobConfig {
    /// Build the configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ALGOLIA_APP_ID`: Application identifier (required)
    /// - `ALGOLIA_API_KEY`: API key with write access (required)
    /// - `ALGOLIA_INDEX`: Target index name (required)
    /// - `ALGOLIA_HOST`: Base URL override (default: `https://{app_id}.algolia.net`)
    /// - `ALGOLIA_BATCH_SIZE`: Records per batch write (default: 1000)
    /// - `ALGOLIA_TASK_POLL_INTERVAL_MS`: Delay between task checks (default: 100)
    /// - `ALGOLIA_TASK_TIMEOUT_SECS`: Maximum wait per task (default: unbounded)
    /// - `CATALOG_INPUT_PATH`: Catalog file (default: ./data/products.json)
    /// - `DISCOUNT_CATEGORY`: Category to discount (default: Cameras & Camcorders)
    /// - `DISCOUNT_PERCENTAGE`: Discount in percent, 0-100 (default: 20)
    ///
    /// # Returns
    ///
    /// * `Ok(JobConfig)` - Resolved configuration
    /// * `Err(IndexingError::ConfigError)` - If a required variable is missing or a value is invalid
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let required = |key: &str| {
            value(key).ok_or_else(|| {
                IndexingError::config(format!("Missing required environment variable {}", key))
            })
        };

        let app_id = required(APP_ID_VAR)?;
        let api_key = required(API_KEY_VAR)?;
        let index_name = required(INDEX_VAR)?;

        let mut index = IndexConfig::new(app_id, api_key, index_name);
        if let Some(host) = value(HOST_VAR) {
            index = index.with_host(host);
        }

        let mut service = SearchIndexServiceConfig::default();
        if let Some(batch_size) = parse_var::<usize>(BATCH_SIZE_VAR, value(BATCH_SIZE_VAR))? {
            if batch_size == 0 {
                return Err(IndexingError::config(format!(
                    "{} must be greater than zero",
                    BATCH_SIZE_VAR
                )));
            }
            service.max_batch_size = batch_size;
        }
        if let Some(interval) = parse_var::<u64>(POLL_INTERVAL_VAR, value(POLL_INTERVAL_VAR))? {
            service.task_poll_interval = Duration::from_millis(interval);
        }
        service.task_timeout =
            parse_var::<u64>(TASK_TIMEOUT_VAR, value(TASK_TIMEOUT_VAR))?.map(Duration::from_secs);

        let input_path = value(INPUT_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_PATH));
        let category = value(CATEGORY_VAR).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let percentage = parse_var::<f64>(PERCENTAGE_VAR, value(PERCENTAGE_VAR))?
            .unwrap_or(DEFAULT_PERCENTAGE);

        if !(0.0..=100.0).contains(&percentage) {
            return Err(IndexingError::config(format!(
                "{} must be between 0 and 100, got {}",
                PERCENTAGE_VAR, percentage
            )));
        }

        Ok(Self {
            index,
            service,
            input_path,
            category,
            percentage,
        })
    }
}

fn parse_var<T>(key: &str, value: Option<String>) -> Result<Option<T>, IndexingError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                IndexingError::config(format!("Invalid value for {}: {:?} ({})", key, raw, e))
            })
        })
        .transpose()
}
