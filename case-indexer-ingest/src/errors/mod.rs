//! Error types for the case indexer ingest.

use case_indexer_repository::SearchError;
use thiserror::Error;

/// Errors that can occur in the case indexer ingest.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Error from the source component (missing file, malformed JSON).
    #[error("Source error: {0}")]
    SourceError(String),

    /// Error from the processor component.
    #[error("Processor error: {0}")]
    ProcessorError(String),

    /// Error from the loader component.
    #[error("Loader error: {0}")]
    LoaderError(String),

    /// Error from the search engine.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchError),
}

impl IngestError {
    /// Create a source error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::SourceError(msg.into())
    }

    /// Create a processor error.
    pub fn processor(msg: impl Into<String>) -> Self {
        Self::ProcessorError(msg.into())
    }

    /// Create a loader error.
    pub fn loader(msg: impl Into<String>) -> Self {
        Self::LoaderError(msg.into())
    }
}
