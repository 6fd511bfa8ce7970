//! Error types for the case indexer repository.

mod search_error;

pub use search_error::SearchError;
