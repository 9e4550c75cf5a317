// file: src/models/run.rs
// description: per-backend benchmark run and whole-report models
// reference: internal data structures

use crate::bench::progress::IngestStats;
use crate::models::{QueryOutcome, QuerySpec};

#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub backend: String,
    pub ingest: IngestStats,
    /// One entry per configured query, in query order
    pub outcomes: Vec<QueryOutcome>,
}

impl BenchmarkRun {
    pub fn new(backend: impl Into<String>, ingest: IngestStats) -> Self {
        Self {
            backend: backend.into(),
            ingest,
            outcomes: Vec::new(),
        }
    }

    pub fn failed_queries(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

/// A backend whose setup failed, so nothing else ran against it.
#[derive(Debug, Clone, PartialEq)]
pub struct AbortedBackend {
    pub backend: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct BenchmarkReport {
    pub queries: Vec<QuerySpec>,
    pub runs: Vec<BenchmarkRun>,
    pub aborted: Vec<AbortedBackend>,
}

impl BenchmarkReport {
    pub fn new(queries: Vec<QuerySpec>) -> Self {
        Self {
            queries,
            runs: Vec::new(),
            aborted: Vec::new(),
        }
    }

    /// True when at least one backend was attempted and none got past setup.
    pub fn all_aborted(&self) -> bool {
        self.runs.is_empty() && !self.aborted.is_empty()
    }
}
