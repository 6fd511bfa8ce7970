//! Bulk request payload construction.
//!
//! The bulk API takes alternating action and document entries, encoded as
//! newline-delimited JSON. This module builds the entry list for a chunk of
//! the record sequence.

use serde_json::{json, Value};

use case_indexer_shared::CaseRecord;

/// Build the alternating action/document entries for records in `[start, end)`.
///
/// The range is clamped to the sequence bounds. Each record contributes one
/// empty "index" action directive (the target index and pipeline are carried
/// by the request URL) followed by the record itself. Ordering within the
/// chunk is preserved from the source sequence.
pub fn bulk_entries(records: &[CaseRecord], start: usize, end: usize) -> Vec<Value> {
    let end = end.min(records.len());
    let start = start.min(end);

    let mut entries = Vec::with_capacity((end - start) * 2);
    for record in &records[start..end] {
        entries.push(json!({"index": {}}));
        entries.push(Value::Object(record.fields().clone()));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(texts: &[&str]) -> Vec<CaseRecord> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                serde_json::from_value(json!({
                    "case_identifier": format!("case-{}", i),
                    "full_case_text": text
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_entry_pairs_match_record_count() {
        let records = records(&["a", "b", "c"]);
        let entries = bulk_entries(&records, 0, records.len());

        assert_eq!(entries.len(), 6);
        for pair in entries.chunks(2) {
            assert_eq!(pair[0], json!({"index": {}}));
            assert!(pair[1].is_object());
        }
    }

    #[test]
    fn test_range_is_clamped() {
        let records = records(&["a", "b", "c"]);

        assert_eq!(bulk_entries(&records, 1, 100).len(), 4);
        assert_eq!(bulk_entries(&records, 10, 20).len(), 0);
        assert_eq!(bulk_entries(&records, 2, 1).len(), 0);
    }

    #[test]
    fn test_ordering_is_preserved() {
        let records = records(&["first", "second"]);
        let entries = bulk_entries(&records, 0, 2);

        assert_eq!(entries[1]["full_case_text"], "first");
        assert_eq!(entries[3]["full_case_text"], "second");
    }

    #[test]
    fn test_non_ascii_text_survives_serialization() {
        let records = records(&["نص الحكم الكامل"]);
        let entries = bulk_entries(&records, 0, 1);

        let line = serde_json::to_string(&entries[1]).unwrap();
        assert!(line.contains("نص الحكم الكامل"));
    }

    #[test]
    fn test_empty_sequence() {
        assert!(bulk_entries(&[], 0, 10).is_empty());
    }
}
