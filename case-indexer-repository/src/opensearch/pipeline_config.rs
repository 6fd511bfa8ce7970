//! Ingestion pipeline body construction.
//!
//! This module builds the JSON body submitted to the engine's
//! pipeline-management endpoint.

use serde_json::{json, Value};

use crate::types::PipelineDefinition;

/// Build the pipeline-management request body for a definition.
///
/// The body describes a single embedding-generation stage: the engine reads
/// the listed source fields from each document and calls the configured
/// provider with the bearer credential.
pub fn pipeline_body(definition: &PipelineDefinition) -> Value {
    json!({
        "description": definition.description,
        "processors": [
            {
                "ai_embed": {
                    "source_fields": definition.source_fields,
                    "provider": definition.provider,
                    "headers": {
                        "Authorization": format!("Bearer {}", definition.credential)
                    }
                }
            }
        ]
    })
}
