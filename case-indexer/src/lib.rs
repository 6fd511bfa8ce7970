//! # Case Indexer
//!
//! Main library for the case indexer binary.
//!
//! This crate provides the configuration surface, dependency wiring, and
//! console reporting for running a bulk-loading pass.

pub mod config;
pub mod reporter;

pub use config::{Dependencies, RunConfig};

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] case_indexer_ingest::IngestError),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] case_indexer_repository::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
