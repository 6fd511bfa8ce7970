//! OpenSearch implementation of the search engine client.
//!
//! This module provides a concrete implementation of `SearchEngineClient`
//! using OpenSearch as the backend, plus the request-body builders for the
//! pipeline-management and bulk APIs.

mod bulk;
mod client;
mod pipeline_config;

pub use bulk::bulk_entries;
pub use client::OpenSearchCaseClient;
pub use pipeline_config::pipeline_body;
