// file: src/bench/driver.rs
// description: runs setup, ingestion and the query sweep against each backend in turn
// reference: orchestrates the sequential benchmark workflow

use crate::backend::SearchBackend;
use crate::bench::progress::{IngestProgress, IngestStats};
use crate::config::BenchmarkConfig;
use crate::error::Result;
use crate::models::{
    AbortedBackend, BenchmarkReport, BenchmarkRun, Document, QueryOutcome, QuerySpec,
};
use crate::utils::PhaseTimer;
use tracing::{error, info, warn};

pub struct BenchmarkDriver {
    corpus: Vec<Document>,
    queries: Vec<QuerySpec>,
    show_progress: bool,
}

/// Outcome of running only the setup phase against one backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupStatus {
    pub backend: String,
    pub error: Option<String>,
}

impl BenchmarkDriver {
    pub fn new(corpus: Vec<Document>, queries: Vec<QuerySpec>) -> Self {
        Self {
            corpus,
            queries,
            show_progress: false,
        }
    }

    pub fn from_config(config: &BenchmarkConfig) -> Self {
        Self::new(config.corpus.clone(), config.queries.clone())
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Runs every backend in order. A backend whose setup fails is recorded as
    /// aborted and the next backend still runs. Each backend is closed once its
    /// run ends, whatever the outcome.
    pub async fn run_all(&self, backends: &[Box<dyn SearchBackend>]) -> BenchmarkReport {
        let mut report = BenchmarkReport::new(self.queries.clone());

        for backend in backends {
            let outcome = self.run_backend(backend.as_ref()).await;
            backend.close().await;

            match outcome {
                Ok(run) => report.runs.push(run),
                Err(e) => {
                    error!("Aborting {} run: {}", backend.name(), e);
                    report.aborted.push(AbortedBackend {
                        backend: backend.name().to_string(),
                        message: e.to_string(),
                    });
                }
            }
        }

        report
    }

    /// Setup, ingest, query. Only a setup failure is returned as an error.
    pub async fn run_backend(&self, backend: &dyn SearchBackend) -> Result<BenchmarkRun> {
        info!("=== Benchmarking {} ===", backend.name());

        let timer = PhaseTimer::start(backend.name(), "setup");
        backend.setup().await?;
        timer.finish();

        let ingest = self.ingest(backend).await;
        let mut run = BenchmarkRun::new(backend.name(), ingest);
        run.outcomes = self.query_all(backend).await;

        info!(
            "{}: {} of {} queries succeeded",
            backend.name(),
            run.outcomes.len() - run.failed_queries(),
            run.outcomes.len()
        );
        Ok(run)
    }

    async fn ingest(&self, backend: &dyn SearchBackend) -> IngestStats {
        let timer = PhaseTimer::start(backend.name(), "ingest");
        let mut progress =
            IngestProgress::new(backend.name(), self.corpus.len(), self.show_progress);

        for document in &self.corpus {
            match backend
                .index_document(&document.content, &document.title)
                .await
            {
                Ok(()) => progress.inc_indexed(&document.title),
                Err(e) => {
                    error!("Failed to index {:?}: {}", document.title, e);
                    progress.inc_failed(&document.title);
                }
            }
        }

        let stats = progress.finish();
        timer.finish_documents(stats.documents_indexed);
        if stats.documents_failed > 0 {
            warn!(
                "{}: {} of {} documents failed to index",
                backend.name(),
                stats.documents_failed,
                stats.attempted()
            );
        }
        stats
    }

    async fn query_all(&self, backend: &dyn SearchBackend) -> Vec<QueryOutcome> {
        let mut outcomes = Vec::with_capacity(self.queries.len());
        for query in &self.queries {
            outcomes.push(Self::query_one(backend, query).await);
        }
        outcomes
    }

    async fn query_one(backend: &dyn SearchBackend, query: &QuerySpec) -> QueryOutcome {
        match backend.search(&query.text, query.limit).await {
            Ok(mut result) => {
                // cap at the requested limit
                result.titles.truncate(query.limit);
                info!(
                    "{}: {:?} -> {} results in {:?}",
                    backend.name(),
                    query.text,
                    result.len(),
                    result.elapsed
                );
                QueryOutcome::Completed(result)
            }
            Err(e) => {
                error!("{}", e);
                QueryOutcome::Failed(e.to_string())
            }
        }
    }

    /// Runs only the setup phase against each backend.
    pub async fn setup_only(backends: &[Box<dyn SearchBackend>]) -> Vec<SetupStatus> {
        let mut statuses = Vec::with_capacity(backends.len());

        for backend in backends {
            let result = backend.setup().await;
            backend.close().await;

            if let Err(ref e) = result {
                error!("{}", e);
            }
            statuses.push(SetupStatus {
                backend: backend.name().to_string(),
                error: result.err().map(|e| e.to_string()),
            });
        }

        statuses
    }

    /// Runs the configured queries against data already in each backend,
    /// skipping setup and ingestion.
    pub async fn search_only(&self, backends: &[Box<dyn SearchBackend>]) -> BenchmarkReport {
        let mut report = BenchmarkReport::new(self.queries.clone());

        for backend in backends {
            let mut run = BenchmarkRun::new(backend.name(), IngestStats::new());
            run.outcomes = self.query_all(backend.as_ref()).await;
            backend.close().await;
            report.runs.push(run);
        }

        report
    }
}
