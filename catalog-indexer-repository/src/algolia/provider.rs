//! Algolia provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using Algolia's REST API over `reqwest`.

use async_trait::async_trait;
use catalog_indexer_shared::{IndexSettings, ProductRecord};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use url::Url;

use crate::algolia::index_config::IndexConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{BatchAction, SaveRecordsResponse, TaskId, TaskStatus};
use crate::utils;

const APPLICATION_ID_HEADER: &str = "x-algolia-application-id";
const API_KEY_HEADER: &str = "x-algolia-api-key";

/// Algolia provider implementation.
///
/// Every write returns the backend task ID; waiting for the task is left to the caller.
///
/// # Example
///
/// ```ignore
/// use catalog_indexer_repository::{AlgoliaProvider, IndexConfig, SearchIndexProvider};
///
/// let config = IndexConfig::new("APPID", "api-key", "products");
/// let provider = AlgoliaProvider::new(config)?;
///
/// let task = provider.clear_records().await?;
/// ```
pub struct AlgoliaProvider {
    client: Client,
    base_url: Url,
    index_config: IndexConfig,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    #[serde(rename = "taskID")]
    task_id: TaskId,
}

#[derive(Debug, Deserialize)]
struct TaskStatusResponse {
    status: TaskStatus,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct BatchRequest<'a> {
    requests: Vec<BatchOperation<'a>>,
}

#[derive(Debug, Serialize)]
struct BatchOperation<'a> {
    action: BatchAction,
    body: &'a ProductRecord,
}

impl AlgoliaProvider {
    /// Create a new provider for the configured index.
    ///
    /// # Arguments
    ///
    /// * `index_config` - Credentials, index name and optional host override
    ///
    /// # Returns
    ///
    /// * `Ok(AlgoliaProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the host is not a valid URL or the credentials
    ///   cannot be sent as HTTP headers
    pub fn new(index_config: IndexConfig) -> Result<Self, SearchIndexError> {
        let base_url = Url::parse(&index_config.base_url())
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            APPLICATION_ID_HEADER,
            HeaderValue::from_str(&index_config.app_id)
                .map_err(|e| SearchIndexError::validation(format!("Invalid app id: {}", e)))?,
        );
        let mut api_key = HeaderValue::from_str(&index_config.api_key)
            .map_err(|e| SearchIndexError::validation(format!("Invalid API key: {}", e)))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        info!(
            url = %base_url,
            index = %index_config.index_name,
            "Created Algolia provider"
        );

        Ok(Self {
            client,
            base_url,
            index_config,
        })
    }

    /// Build `{base}/1/indexes/{index}/{segments...}` with each segment percent-encoded.
    fn index_url(&self, segments: &[&str]) -> Result<Url, SearchIndexError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SearchIndexError::connection(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["1", "indexes", self.index_config.index_name.as_str()])
            .extend(segments);
        Ok(url)
    }

    /// Send a request and decode a successful JSON response.
    ///
    /// Non-2xx responses become `RequestError` carrying the backend's message.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: &str,
    ) -> Result<T, SearchIndexError> {
        let response = request
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(format!("{} request failed: {}", operation, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            error!(
                operation = operation,
                status = %status,
                message = %message,
                "Algolia request failed"
            );
            return Err(SearchIndexError::request(status.as_u16(), message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SearchIndexError::parse(format!("{} response: {}", operation, e)))
    }
}

#[async_trait]
impl SearchIndexProvider for AlgoliaProvider {
    async fn clear_records(&self) -> Result<TaskId, SearchIndexError> {
        let url = self.index_url(&["clear"])?;
        let response: TaskResponse = self
            .send(self.client.post(url).body("{}"), "clear")
            .await?;

        debug!(task_id = %response.task_id, "Clear records submitted");
        Ok(response.task_id)
    }

    async fn replace_settings(&self, settings: &IndexSettings) -> Result<TaskId, SearchIndexError> {
        let url = self.index_url(&["settings"])?;
        let body = serde_json::to_vec(settings)
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;
        let response: TaskResponse = self
            .send(self.client.put(url).body(body), "settings")
            .await?;

        debug!(task_id = %response.task_id, "Settings submitted");
        Ok(response.task_id)
    }

    async fn save_records(
        &self,
        records: &[ProductRecord],
    ) -> Result<SaveRecordsResponse, SearchIndexError> {
        let url = self.index_url(&["batch"])?;
        let batch = BatchRequest {
            requests: records
                .iter()
                .map(|record| BatchOperation {
                    action: utils::batch_action(record),
                    body: record,
                })
                .collect(),
        };
        let body =
            serde_json::to_vec(&batch).map_err(|e| SearchIndexError::serialization(e.to_string()))?;
        let response: SaveRecordsResponse = self
            .send(self.client.post(url).body(body), "batch")
            .await?;

        debug!(
            task_id = %response.task_id,
            count = records.len(),
            "Batch submitted"
        );
        Ok(response)
    }

    async fn task_status(&self, task_id: TaskId) -> Result<TaskStatus, SearchIndexError> {
        let task = task_id.to_string();
        let url = self.index_url(&["task", task.as_str()])?;
        let response: TaskStatusResponse = self.send(self.client.get(url), "task").await?;
        Ok(response.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn provider(server: &Server) -> AlgoliaProvider {
        let config = IndexConfig::new("APPID", "secret", "products").with_host(server.url());
        AlgoliaProvider::new(config).unwrap()
    }

    fn records(value: serde_json::Value) -> Vec<ProductRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_index_url_encodes_index_name() {
        let config = IndexConfig::new("APPID", "secret", "products & deals")
            .with_host("https://example.test");
        let provider = AlgoliaProvider::new(config).unwrap();

        let url = provider.index_url(&["task", "12"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/1/indexes/products%20&%20deals/task/12"
        );
    }

    #[test]
    fn test_default_host() {
        let provider = AlgoliaProvider::new(IndexConfig::new("APPID", "secret", "products")).unwrap();
        assert_eq!(
            provider.index_url(&["clear"]).unwrap().as_str(),
            "https://appid.algolia.net/1/indexes/products/clear"
        );
    }

    #[test]
    fn test_rejects_api_key_with_newline() {
        let result = AlgoliaProvider::new(IndexConfig::new("APPID", "bad\nkey", "products"));
        assert!(matches!(result, Err(SearchIndexError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_clear_records_sends_credentials() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/1/indexes/products/clear")
            .match_header("x-algolia-application-id", "APPID")
            .match_header("x-algolia-api-key", "secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"taskID": 101, "updatedAt": "2024-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let task = provider(&server).clear_records().await.unwrap();

        assert_eq!(task, TaskId(101));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_replace_settings_sends_document() {
        let mut server = Server::new_async().await;
        let settings = IndexSettings {
            searchable_attributes: vec!["name".to_string()],
            ..Default::default()
        };
        let mock = server
            .mock("PUT", "/1/indexes/products/settings")
            .match_body(Matcher::Json(json!({ "searchableAttributes": ["name"] })))
            .with_status(200)
            .with_body(r#"{"taskID": 7, "updatedAt": "2024-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let task = provider(&server).replace_settings(&settings).await.unwrap();

        assert_eq!(task, TaskId(7));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_save_records_builds_batch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/1/indexes/products/batch")
            .match_body(Matcher::Json(json!({
                "requests": [
                    { "action": "updateObject", "body": { "objectID": "a1", "price": 80 } },
                    { "action": "addObject", "body": { "price": 5 } }
                ]
            })))
            .with_status(200)
            .with_body(r#"{"taskID": 55, "objectIDs": ["a1", "generated-1"]}"#)
            .create_async()
            .await;

        let response = provider(&server)
            .save_records(&records(json!([
                { "objectID": "a1", "price": 80 },
                { "price": 5 }
            ])))
            .await
            .unwrap();

        assert_eq!(response.task_id, TaskId(55));
        assert_eq!(response.object_ids, vec!["a1", "generated-1"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_carries_backend_message() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/1/indexes/products/batch")
            .with_status(400)
            .with_body(r#"{"message": "Record at the position 0 objectID=a1 is too big", "status": 400}"#)
            .create_async()
            .await;

        let err = provider(&server)
            .save_records(&records(json!([{ "objectID": "a1", "price": 1 }])))
            .await
            .unwrap_err();

        match err {
            SearchIndexError::RequestError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Record at the position 0 objectID=a1 is too big");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_with_plain_body() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/1/indexes/products/clear")
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let err = provider(&server).clear_records().await.unwrap_err();

        assert!(matches!(
            err,
            SearchIndexError::RequestError { status: 503, ref message } if message == "upstream unavailable"
        ));
    }

    #[tokio::test]
    async fn test_task_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/1/indexes/products/task/9")
            .with_status(200)
            .with_body(r#"{"status": "notPublished", "pendingTask": true}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/1/indexes/products/task/10")
            .with_status(200)
            .with_body(r#"{"status": "published", "pendingTask": false}"#)
            .create_async()
            .await;

        let provider = provider(&server);
        assert_eq!(
            provider.task_status(TaskId(9)).await.unwrap(),
            TaskStatus::NotPublished
        );
        assert_eq!(
            provider.task_status(TaskId(10)).await.unwrap(),
            TaskStatus::Published
        );
    }

    #[tokio::test]
    async fn test_malformed_response_is_parse_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/1/indexes/products/clear")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = provider(&server).clear_records().await.unwrap_err();
        assert!(matches!(err, SearchIndexError::ParseError(_)));
    }
}
