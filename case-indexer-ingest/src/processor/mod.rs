//! Processor module for the case indexer ingest.
//!
//! Prepares records for upload: each record is copied and its recognized
//! text fields are truncated to the configured thresholds. Source records
//! are never mutated.

use serde_json::Value;
use tracing::warn;

use case_indexer_shared::{CaseRecord, CASE_IDENTIFIER_FIELD, FULL_CASE_TEXT_FIELD};

/// Character thresholds for the recognized text fields.
///
/// Truncation counts Unicode scalar values, not bytes, so multi-byte text
/// keeps its leading `max` characters intact.
#[derive(Debug, Clone)]
pub struct TruncationPolicy {
    /// Maximum characters retained in `full_case_text`.
    pub max_case_text_chars: usize,
    /// Maximum characters retained in `case_identifier`.
    pub max_identifier_chars: usize,
}

impl Default for TruncationPolicy {
    fn default() -> Self {
        Self {
            max_case_text_chars: 2000,
            max_identifier_chars: 1000,
        }
    }
}

/// Processor that prepares records for upload.
pub struct CaseProcessor {
    policy: TruncationPolicy,
}

impl CaseProcessor {
    /// Create a processor with the given truncation policy.
    pub fn new(policy: TruncationPolicy) -> Self {
        Self { policy }
    }

    /// Prepare a slice of records for upload.
    ///
    /// Returns independent copies; the input records are left unchanged for
    /// later chunks and diagnostics.
    pub fn prepare(&self, records: &[CaseRecord]) -> Vec<CaseRecord> {
        records.iter().map(|r| self.prepare_record(r)).collect()
    }

    fn prepare_record(&self, record: &CaseRecord) -> CaseRecord {
        let mut copy = record.clone();
        truncate_field(&mut copy, FULL_CASE_TEXT_FIELD, self.policy.max_case_text_chars);
        truncate_field(
            &mut copy,
            CASE_IDENTIFIER_FIELD,
            self.policy.max_identifier_chars,
        );
        copy
    }
}

/// Truncate a string field in place if it exceeds `limit` characters.
fn truncate_field(record: &mut CaseRecord, field: &str, limit: usize) {
    let truncated = match record.get_str(field) {
        Some(text) => {
            let original_chars = text.chars().count();
            if original_chars <= limit {
                None
            } else {
                Some((original_chars, text.chars().take(limit).collect::<String>()))
            }
        }
        None => None,
    };

    if let Some((original_chars, text)) = truncated {
        warn!(
            field = field,
            original_chars = original_chars,
            limit = limit,
            "Truncating oversized field"
        );
        record.insert(field, Value::String(text));
    }
}
