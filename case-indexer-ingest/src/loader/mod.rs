//! Loader module for the case indexer ingest.
//!
//! Uploads the record sequence into the search index, one chunk per bulk
//! request, strictly in order. A failed chunk is recorded and the remaining
//! chunks are still attempted; there is no retry and no rollback.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, instrument, warn};

use crate::errors::IngestError;
use crate::processor::CaseProcessor;
use case_indexer_repository::SearchEngineClient;
use case_indexer_shared::{CaseRecord, ChunkResult};

/// Loader that uploads case records through the bulk API.
pub struct CaseLoader {
    client: Arc<dyn SearchEngineClient>,
    processor: CaseProcessor,
    chunk_size: Option<usize>,
}

impl CaseLoader {
    /// Create a loader.
    ///
    /// `chunk_size` of `None` (or zero via the configuration surface) uploads
    /// the whole sequence as a single chunk.
    pub fn new(
        client: Arc<dyn SearchEngineClient>,
        processor: CaseProcessor,
        chunk_size: Option<usize>,
    ) -> Self {
        Self {
            client,
            processor,
            chunk_size,
        }
    }

    /// Upload all records, returning one result per chunk.
    ///
    /// Each chunk is prepared (copied and truncated) just before its bulk
    /// request, so the source sequence stays unmodified throughout the run.
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub async fn upload(&self, records: &[CaseRecord]) -> Result<Vec<ChunkResult>, IngestError> {
        let ranges = chunk_ranges(records.len(), self.chunk_size);
        let mut results = Vec::with_capacity(ranges.len());

        for (start, end) in ranges {
            let prepared = self.processor.prepare(&records[start..end]);
            let started = Instant::now();

            match self.client.bulk_index(&prepared).await {
                Ok(summary) => {
                    let latency_ms = started.elapsed().as_millis() as u64;
                    if let Some(ref error) = summary.first_error {
                        warn!(
                            start = start,
                            end = end,
                            error = %error,
                            "Chunk uploaded with item-level errors"
                        );
                    } else {
                        info!(start = start, end = end, latency_ms = latency_ms, "Chunk uploaded");
                    }
                    results.push(ChunkResult {
                        start,
                        end,
                        records: end - start,
                        success: true,
                        latency_ms,
                        error: summary.first_error,
                    });
                }
                Err(e) => {
                    let latency_ms = started.elapsed().as_millis() as u64;
                    error!(start = start, end = end, error = %e, "Chunk upload failed");
                    results.push(ChunkResult {
                        start,
                        end,
                        records: end - start,
                        success: false,
                        latency_ms,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        Ok(results)
    }
}

/// Partition `len` records into contiguous `[start, end)` ranges.
///
/// `chunk_size` of `None` yields a single range covering the whole sequence.
/// The final range is clamped to the sequence length.
pub fn chunk_ranges(len: usize, chunk_size: Option<usize>) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }

    match chunk_size {
        None | Some(0) => vec![(0, len)],
        Some(size) => {
            let mut ranges = Vec::with_capacity(len.div_ceil(size));
            let mut start = 0;
            while start < len {
                ranges.push((start, (start + size).min(len)));
                start += size;
            }
            ranges
        }
    }
}
