//! Request and response types for search engine operations.

/// Definition of the server-side embedding pipeline.
///
/// Describes a single processing stage that generates embeddings for the
/// listed source fields using an external provider. Registered once at the
/// start of a run with create-or-replace semantics; the engine owns the
/// pipeline afterwards.
#[derive(Debug, Clone)]
pub struct PipelineDefinition {
    /// Name of the pipeline on the engine.
    pub name: String,
    /// Human-readable description stored with the pipeline.
    pub description: String,
    /// Fields the embedding stage reads from each document.
    pub source_fields: Vec<String>,
    /// Embedding provider identifier (e.g. "openai").
    pub provider: String,
    /// Bearer credential forwarded to the provider by the engine.
    pub credential: String,
}

impl PipelineDefinition {
    /// Create a pipeline definition with a default description.
    pub fn new(
        name: impl Into<String>,
        source_fields: Vec<String>,
        provider: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: "Generate embeddings for legal case records".to_string(),
            source_fields,
            provider: provider.into(),
            credential: credential.into(),
        }
    }

    /// Override the pipeline description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Outcome of a single bulk upload request.
///
/// Produced for requests that succeeded at the HTTP level. Item-level
/// indexing errors reported by the engine are surfaced here as diagnostics;
/// they do not fail the request.
#[derive(Debug, Clone)]
pub struct BulkSummary {
    /// Number of records submitted in the request.
    pub records: usize,
    /// Whether the engine set the response-level error flag.
    pub errors: bool,
    /// First item-level error in the response, if any.
    pub first_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_definition_builder() {
        let definition = PipelineDefinition::new(
            "cases_pipeline",
            vec!["full_case_text".to_string()],
            "openai",
            "sk-test",
        )
        .with_description("Embeddings for cases");

        assert_eq!(definition.name, "cases_pipeline");
        assert_eq!(definition.description, "Embeddings for cases");
        assert_eq!(definition.source_fields, vec!["full_case_text"]);
        assert_eq!(definition.provider, "openai");
        assert_eq!(definition.credential, "sk-test");
    }
}
