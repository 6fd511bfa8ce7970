//! Orchestrator module for the case indexer ingest.
//!
//! Runs the three stages strictly in sequence: register the ingestion
//! pipeline, load the record file, upload the chunks. A failed stage
//! short-circuits the stages after it; no state survives the run.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, instrument};

use crate::errors::IngestError;
use crate::loader::CaseLoader;
use crate::source::CaseFileSource;
use case_indexer_repository::{PipelineDefinition, SearchEngineClient};
use case_indexer_shared::RunSummary;

/// Orchestrates one bulk-loading run.
pub struct Orchestrator {
    client: Arc<dyn SearchEngineClient>,
    source: CaseFileSource,
    loader: CaseLoader,
    pipeline: PipelineDefinition,
}

impl Orchestrator {
    /// Create an orchestrator from its wired components.
    pub fn new(
        client: Arc<dyn SearchEngineClient>,
        source: CaseFileSource,
        loader: CaseLoader,
        pipeline: PipelineDefinition,
    ) -> Self {
        Self {
            client,
            source,
            loader,
            pipeline,
        }
    }

    /// Execute the run and produce its summary.
    #[instrument(skip(self), fields(pipeline = %self.pipeline.name))]
    pub async fn run(&self) -> Result<RunSummary, IngestError> {
        let started_at = Utc::now();
        let started = Instant::now();

        info!(pipeline = %self.pipeline.name, "Registering ingestion pipeline");
        self.client.register_pipeline(&self.pipeline).await?;

        let records = self.source.load()?;
        let chunks = self.loader.upload(&records).await?;

        let summary = RunSummary {
            total_records: records.len(),
            started_at,
            elapsed_ms: started.elapsed().as_millis() as u64,
            chunks,
        };

        info!(
            total_records = summary.total_records,
            succeeded_chunks = summary.succeeded_chunks(),
            failed_chunks = summary.failed_chunks(),
            elapsed_ms = summary.elapsed_ms,
            "Run complete"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::{CaseProcessor, TruncationPolicy};
    use async_trait::async_trait;
    use case_indexer_repository::{BulkSummary, SearchError};
    use case_indexer_shared::CaseRecord;
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockSearchClient {
        register_calls: AtomicUsize,
        bulk_calls: AtomicUsize,
        fail_register: bool,
    }

    impl MockSearchClient {
        fn new() -> Self {
            Self {
                register_calls: AtomicUsize::new(0),
                bulk_calls: AtomicUsize::new(0),
                fail_register: false,
            }
        }

        fn failing_registration() -> Self {
            Self {
                fail_register: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SearchEngineClient for MockSearchClient {
        async fn register_pipeline(
            &self,
            _definition: &PipelineDefinition,
        ) -> Result<(), SearchError> {
            self.register_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_register {
                return Err(SearchError::pipeline("rejected"));
            }
            Ok(())
        }

        async fn bulk_index(&self, records: &[CaseRecord]) -> Result<BulkSummary, SearchError> {
            self.bulk_calls.fetch_add(1, Ordering::SeqCst);
            Ok(BulkSummary {
                records: records.len(),
                errors: false,
                first_error: None,
            })
        }

        async fn health_check(&self) -> Result<bool, SearchError> {
            Ok(true)
        }
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "case-indexer-orchestrator-{}-{}",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn orchestrator(client: Arc<MockSearchClient>, path: impl Into<PathBuf>) -> Orchestrator {
        let loader = CaseLoader::new(
            client.clone(),
            CaseProcessor::new(TruncationPolicy::default()),
            Some(2),
        );
        let pipeline = PipelineDefinition::new(
            "cases_pipeline",
            vec!["full_case_text".to_string()],
            "openai",
            "sk-test",
        );
        Orchestrator::new(client, CaseFileSource::new(path), loader, pipeline)
    }

    #[tokio::test]
    async fn test_full_run() {
        let client = Arc::new(MockSearchClient::new());
        let path = temp_file(
            "run.json",
            r#"[{"case_identifier": "a"}, {"case_identifier": "b"}, {"case_identifier": "c"}]"#,
        );

        let summary = orchestrator(client.clone(), &path).run().await.unwrap();

        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.chunks.len(), 2);
        assert!(summary.is_success());
        assert_eq!(client.register_calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 2);

        fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_missing_file_stops_before_upload() {
        let client = Arc::new(MockSearchClient::new());

        let err = orchestrator(client.clone(), "/nonexistent/records.json")
            .run()
            .await
            .unwrap_err();

        assert!(matches!(err, IngestError::SourceError(_)));
        assert_eq!(client.register_calls.load(Ordering::SeqCst), 1);
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_registration_failure_stops_before_load() {
        let client = Arc::new(MockSearchClient::failing_registration());
        let path = temp_file("unread.json", r#"[{"case_identifier": "a"}]"#);

        let err = orchestrator(client.clone(), &path).run().await.unwrap_err();

        assert!(matches!(err, IngestError::SearchError(_)));
        assert_eq!(client.bulk_calls.load(Ordering::SeqCst), 0);

        fs::remove_file(path).ok();
    }
}
