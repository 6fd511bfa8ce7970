//! Source module for the case indexer ingest.
//!
//! Reads case records from a JSON file on disk.

use std::fs;
use std::path::PathBuf;

use tracing::{error, info};

use crate::errors::IngestError;
use case_indexer_shared::CaseRecord;

/// File source for case records.
///
/// Loads the whole file as a JSON array of record objects. There are no
/// partial loads: either every record parses or the load fails.
pub struct CaseFileSource {
    path: PathBuf,
}

impl CaseFileSource {
    /// Create a source for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load and decode the record sequence.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<CaseRecord>)` - All records from the file, in array order
    /// * `Err(IngestError::SourceError)` - If the file is missing, unreadable,
    ///   or does not contain a JSON array of objects
    pub fn load(&self) -> Result<Vec<CaseRecord>, IngestError> {
        if !self.path.exists() {
            error!(path = %self.path.display(), "Case file not found");
            return Err(IngestError::source(format!(
                "File not found: {}",
                self.path.display()
            )));
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Failed to read case file");
            IngestError::source(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let records: Vec<CaseRecord> = serde_json::from_str(&contents).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Malformed JSON in case file");
            IngestError::source(format!("Malformed JSON in {}: {}", self.path.display(), e))
        })?;

        info!(
            count = records.len(),
            path = %self.path.display(),
            "Loaded case records"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("case-indexer-source-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_array() {
        let path = temp_file(
            "valid.json",
            r#"[{"case_identifier": "a", "year": 1}, {"case_identifier": "b"}]"#,
        );

        let source = CaseFileSource::new(&path);
        let records = source.load().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_str("case_identifier"), Some("a"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_fails() {
        let source = CaseFileSource::new("/nonexistent/records.json");
        let err = source.load().unwrap_err();
        assert!(matches!(err, IngestError::SourceError(_)));
    }

    #[test]
    fn test_malformed_json_fails() {
        let path = temp_file("malformed.json", r#"[{"case_identifier": "#);

        let source = CaseFileSource::new(&path);
        let err = source.load().unwrap_err();
        assert!(matches!(err, IngestError::SourceError(_)));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_non_array_top_level_fails() {
        let path = temp_file("object.json", r#"{"case_identifier": "a"}"#);

        let source = CaseFileSource::new(&path);
        assert!(source.load().is_err());

        fs::remove_file(path).ok();
    }
}
