//! # Case Indexer Shared
//!
//! Shared types and data structures for the case indexer system.
//!
//! This crate holds the case record type exchanged between the ingest
//! components and the search engine repository, plus the run outcome types
//! reported at the end of a bulk-loading run.

pub mod record;
pub mod summary;

pub use record::{CaseRecord, CASE_IDENTIFIER_FIELD, FULL_CASE_TEXT_FIELD};
pub use summary::{ChunkResult, RunSummary};
