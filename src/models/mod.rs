// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod run;
pub mod search_result;

pub use document::{Document, QuerySpec};
pub use run::{AbortedBackend, BenchmarkReport, BenchmarkRun};
pub use search_result::{QueryOutcome, SearchResult};
