//! Dependency initialization and wiring for the case indexer.

use std::sync::Arc;

use tracing::info;

use crate::config::RunConfig;
use crate::IndexingError;
use case_indexer_ingest::{
    loader::CaseLoader,
    orchestrator::Orchestrator,
    processor::{CaseProcessor, TruncationPolicy},
    source::CaseFileSource,
};
use case_indexer_repository::{
    OpenSearchCaseClient, PipelineDefinition, SearchEngineClient,
};
use case_indexer_shared::{CASE_IDENTIFIER_FIELD, FULL_CASE_TEXT_FIELD};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from a resolved configuration.
    ///
    /// Validates the credential before creating the engine client, then
    /// verifies the engine is reachable and healthy before wiring the run.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If validation or initialization fails
    pub async fn new(config: &RunConfig) -> Result<Self, IndexingError> {
        config.validate_credential()?;

        let client = OpenSearchCaseClient::new(
            &config.engine_url,
            &config.index_name,
            &config.pipeline_name,
        )
        .map_err(|e| IndexingError::config(format!("Failed to create engine client: {}", e)))?;
        let client: Arc<dyn SearchEngineClient> = Arc::new(client);

        let healthy = client
            .health_check()
            .await
            .map_err(|e| IndexingError::config(format!("Engine health check failed: {}", e)))?;

        if !healthy {
            return Err(IndexingError::config("Search engine cluster is unhealthy"));
        }

        info!("Search engine connection verified");

        let pipeline = PipelineDefinition::new(
            &config.pipeline_name,
            vec![
                FULL_CASE_TEXT_FIELD.to_string(),
                CASE_IDENTIFIER_FIELD.to_string(),
            ],
            &config.provider,
            &config.credential,
        );

        let source = CaseFileSource::new(&config.file_path);

        let processor = CaseProcessor::new(TruncationPolicy {
            max_case_text_chars: config.max_case_text_chars,
            max_identifier_chars: config.max_identifier_chars,
        });

        let loader = CaseLoader::new(Arc::clone(&client), processor, config.chunk_size);

        let orchestrator = Orchestrator::new(client, source, loader, pipeline);

        Ok(Self { orchestrator })
    }
}
