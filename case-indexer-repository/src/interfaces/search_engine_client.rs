//! Search engine client trait definition.
//!
//! This module defines the abstract interface for search engine operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch,
//! mocks for testing, etc.).

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{BulkSummary, PipelineDefinition};
use case_indexer_shared::CaseRecord;

/// Abstract interface for search engine operations.
///
/// This trait defines all the operations required to bulk-load case records
/// through a server-side ingestion pipeline. Implementations can be swapped
/// for different backends (OpenSearch, mock, etc.) enabling easy testing.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, SearchError>` for consistent error handling.
#[async_trait]
pub trait SearchEngineClient: Send + Sync {
    /// Register the ingestion pipeline on the engine.
    ///
    /// Uses create-or-replace semantics: registering the same definition
    /// twice leaves the server-side pipeline unchanged after the second call.
    ///
    /// # Arguments
    ///
    /// * `definition` - The pipeline definition to register
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the pipeline was created or replaced successfully
    /// * `Err(SearchError::PipelineError)` - If registration fails; the
    ///   engine's response body is included in the error
    async fn register_pipeline(&self, definition: &PipelineDefinition) -> Result<(), SearchError>;

    /// Upload a chunk of records in a single bulk request.
    ///
    /// Records are routed through the registered ingestion pipeline so the
    /// engine generates embeddings before indexing. An empty slice is a no-op
    /// and performs no network call.
    ///
    /// # Arguments
    ///
    /// * `records` - The records forming this chunk, in source order
    ///
    /// # Returns
    ///
    /// * `Ok(BulkSummary)` - The request succeeded at the HTTP level; the
    ///   summary carries any item-level errors the engine reported
    /// * `Err(SearchError::BulkIndexError)` - If the request fails
    async fn bulk_index(&self, records: &[CaseRecord]) -> Result<BulkSummary, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the cluster is healthy
    /// * `Ok(false)` - If the cluster is unhealthy
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
