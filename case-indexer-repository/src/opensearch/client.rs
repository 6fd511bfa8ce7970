//! OpenSearch client implementation.
//!
//! This module provides the concrete implementation of `SearchEngineClient`
//! using the OpenSearch Rust client.

use async_trait::async_trait;
use opensearch::{
    cluster::ClusterHealthParts,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    ingest::IngestPutPipelineParts,
    BulkParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::errors::SearchError;
use crate::interfaces::SearchEngineClient;
use crate::opensearch::bulk::bulk_entries;
use crate::opensearch::pipeline_config::pipeline_body;
use crate::types::{BulkSummary, PipelineDefinition};
use case_indexer_shared::CaseRecord;

/// OpenSearch client implementation.
///
/// Uploads case records to a fixed target index through a named ingestion
/// pipeline. The index and pipeline are set once at construction; each bulk
/// request carries them as URL parameters.
///
/// # Example
///
/// ```ignore
/// let client = OpenSearchCaseClient::new(
///     "http://localhost:9200",
///     "legal_cases",
///     "legal_cases_pipeline",
/// )?;
///
/// client.register_pipeline(&definition).await?;
/// let summary = client.bulk_index(&records).await?;
/// ```
pub struct OpenSearchCaseClient {
    client: OpenSearch,
    index: String,
    pipeline: String,
}

impl OpenSearchCaseClient {
    /// Create a new OpenSearch client connected to the specified URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `index` - The target index for bulk uploads
    /// * `pipeline` - The ingestion pipeline bulk uploads are routed through
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchCaseClient)` - A new client instance
    /// * `Err(SearchError)` - If connection setup fails
    pub fn new(
        url: &str,
        index: impl Into<String>,
        pipeline: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let parsed_url = Url::parse(url).map_err(|e| SearchError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);
        let index = index.into();
        let pipeline = pipeline.into();

        info!(
            url = %url,
            index = %index,
            pipeline = %pipeline,
            "Created OpenSearch client"
        );

        Ok(Self {
            client,
            index,
            pipeline,
        })
    }

    /// Extract the first item-level error from a bulk response body.
    fn first_item_error(body: &Value) -> Option<String> {
        body.get("items")?
            .as_array()?
            .iter()
            .find_map(|item| item.get("index").and_then(|i| i.get("error")))
            .map(|error| error.to_string())
    }
}

#[async_trait]
impl SearchEngineClient for OpenSearchCaseClient {
    /// Register the ingestion pipeline, replacing any existing definition.
    async fn register_pipeline(&self, definition: &PipelineDefinition) -> Result<(), SearchError> {
        let response = self
            .client
            .ingest()
            .put_pipeline(IngestPutPipelineParts::Id(&definition.name))
            .body(pipeline_body(definition))
            .send()
            .await
            .map_err(|e| SearchError::pipeline(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Pipeline registration failed");
            return Err(SearchError::pipeline(format!(
                "Registration failed with status {}: {}",
                status, error_body
            )));
        }

        info!(pipeline = %definition.name, "Pipeline registered");
        Ok(())
    }

    /// Upload a chunk of records in a single bulk request.
    ///
    /// The request succeeds at the HTTP level even when individual items fail
    /// to index; those failures are surfaced in the returned summary and
    /// logged, not raised.
    async fn bulk_index(&self, records: &[CaseRecord]) -> Result<BulkSummary, SearchError> {
        if records.is_empty() {
            return Ok(BulkSummary {
                records: 0,
                errors: false,
                first_error: None,
            });
        }

        let body: Vec<JsonBody<Value>> = bulk_entries(records, 0, records.len())
            .into_iter()
            .map(Into::into)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::Index(&self.index))
            .pipeline(&self.pipeline)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchError::bulk_index(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let errors = response_body
            .get("errors")
            .and_then(|e| e.as_bool())
            .unwrap_or(false);
        let first_error = if errors {
            Self::first_item_error(&response_body)
        } else {
            None
        };

        if let Some(ref error) = first_error {
            warn!(error = %error, "Bulk response contains item-level errors");
        }
        debug!(count = records.len(), "Bulk request accepted");

        Ok(BulkSummary {
            records: records.len(),
            errors,
            first_error,
        })
    }

    /// Check cluster health; green or yellow counts as healthy.
    async fn health_check(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let health: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;
        let status = health
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        info!(status = %status, "Cluster health");

        Ok(status == "green" || status == "yellow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_item_error_found() {
        let body = json!({
            "errors": true,
            "items": [
                {"index": {"status": 201}},
                {"index": {"status": 400, "error": {"type": "mapper_parsing_exception", "reason": "failed to parse"}}},
                {"index": {"status": 201}}
            ]
        });

        let error = OpenSearchCaseClient::first_item_error(&body).unwrap();
        assert!(error.contains("mapper_parsing_exception"));
    }

    #[test]
    fn test_first_item_error_none_when_clean() {
        let body = json!({
            "errors": false,
            "items": [
                {"index": {"status": 201}},
                {"index": {"status": 201}}
            ]
        });

        assert!(OpenSearchCaseClient::first_item_error(&body).is_none());
    }

    #[test]
    fn test_first_item_error_missing_items() {
        assert!(OpenSearchCaseClient::first_item_error(&json!({"errors": true})).is_none());
    }
}
