//! Run outcome types.
//!
//! A run produces one `ChunkResult` per bulk request and a `RunSummary`
//! aggregating them. These types exist for the final console report only;
//! nothing is persisted between runs.

use chrono::{DateTime, Utc};

/// Outcome of uploading one chunk of the record sequence.
#[derive(Debug, Clone)]
pub struct ChunkResult {
    /// Start index of the chunk in the source array (inclusive).
    pub start: usize,
    /// End index of the chunk in the source array (exclusive).
    pub end: usize,
    /// Number of records in the chunk.
    pub records: usize,
    /// Whether the bulk request succeeded at the HTTP level.
    pub success: bool,
    /// Wall-clock latency of the bulk request in milliseconds.
    pub latency_ms: u64,
    /// First error encountered for the chunk, if any.
    ///
    /// Set on HTTP failure, and also on HTTP success when the engine reported
    /// item-level indexing errors (the chunk still counts as successful).
    pub error: Option<String>,
}

/// Aggregate outcome of a bulk-loading run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Total number of records loaded from the source file.
    pub total_records: usize,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Total elapsed wall-clock time in milliseconds.
    pub elapsed_ms: u64,
    /// Per-chunk results, in upload order.
    pub chunks: Vec<ChunkResult>,
}

impl RunSummary {
    /// Number of chunks that succeeded at the HTTP level.
    pub fn succeeded_chunks(&self) -> usize {
        self.chunks.iter().filter(|c| c.success).count()
    }

    /// Number of chunks that failed.
    pub fn failed_chunks(&self) -> usize {
        self.chunks.iter().filter(|c| !c.success).count()
    }

    /// Number of records in chunks that succeeded.
    pub fn uploaded_records(&self) -> usize {
        self.chunks
            .iter()
            .filter(|c| c.success)
            .map(|c| c.records)
            .sum()
    }

    /// Whether every chunk succeeded.
    pub fn is_success(&self) -> bool {
        self.chunks.iter().all(|c| c.success)
    }
}
