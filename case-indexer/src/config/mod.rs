//! Configuration for the case indexer run.

pub mod dependencies;

pub use dependencies::Dependencies;

use std::path::PathBuf;

use crate::IndexingError;

/// Environment variable holding the embedding provider credential.
pub const CREDENTIAL_ENV_VAR: &str = "OPENAI_API_KEY";

/// Placeholder left in template configurations before a real key is set.
pub const CREDENTIAL_PLACEHOLDER: &str = "YOUR_OPENAI_API_KEY_HERE";

/// Resolved configuration for one bulk-loading run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the JSON array of case records.
    pub file_path: PathBuf,
    /// Base URL of the search engine.
    pub engine_url: String,
    /// Target index for the uploaded records.
    pub index_name: String,
    /// Name of the ingestion pipeline to register and route uploads through.
    pub pipeline_name: String,
    /// Embedding provider identifier.
    pub provider: String,
    /// Provider credential forwarded to the engine.
    pub credential: String,
    /// Records per bulk request; `None` uploads everything in one chunk.
    pub chunk_size: Option<usize>,
    /// Maximum characters retained in `full_case_text`.
    pub max_case_text_chars: usize,
    /// Maximum characters retained in `case_identifier`.
    pub max_identifier_chars: usize,
}

impl RunConfig {
    /// Validate the provider credential before any network call.
    ///
    /// An empty credential or the literal template placeholder aborts the
    /// run; a placeholder-valued real key cannot occur in practice, so the
    /// check fails closed.
    pub fn validate_credential(&self) -> Result<(), IndexingError> {
        if self.credential.trim().is_empty() {
            return Err(IndexingError::config(format!(
                "Provider credential is empty; set {}",
                CREDENTIAL_ENV_VAR
            )));
        }
        if self.credential == CREDENTIAL_PLACEHOLDER {
            return Err(IndexingError::config(format!(
                "Provider credential is still the template placeholder; set {}",
                CREDENTIAL_ENV_VAR
            )));
        }
        Ok(())
    }
}
