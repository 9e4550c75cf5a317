// file: src/backend/mod.rs
// description: search backend capability trait and backend construction
// reference: https://docs.rs/async-trait

pub mod elasticsearch;
pub mod memory;
pub mod postgres;

pub use elasticsearch::ElasticsearchBackend;
pub use memory::InMemoryBackend;
pub use postgres::PostgresBackend;

use crate::config::Config;
use crate::error::Result;
use crate::models::SearchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A full-text search system under benchmark.
///
/// Implementations own their connection resources. All ranking and matching
/// semantics belong to the system behind the adapter.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Label used in logs and reports.
    fn name(&self) -> &str;

    /// Ensure storage exists. Must succeed when it already does.
    async fn setup(&self) -> Result<()>;

    async fn index_document(&self, content: &str, title: &str) -> Result<()>;

    /// Return at most `limit` titles in backend order, with the call latency.
    async fn search(&self, query: &str, limit: usize) -> Result<SearchResult>;

    /// Release connection resources. Called once the backend's run is over.
    async fn close(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Postgres,
    Elasticsearch,
    Memory,
}

impl BackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Postgres => "postgres",
            BackendKind::Elasticsearch => "elasticsearch",
            BackendKind::Memory => "memory",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a backend client. Nothing is contacted until `setup` runs.
pub fn connect(kind: BackendKind, config: &Config) -> Result<Box<dyn SearchBackend>> {
    let backend: Box<dyn SearchBackend> = match kind {
        BackendKind::Postgres => Box::new(PostgresBackend::new(config.postgres.clone())?),
        BackendKind::Elasticsearch => {
            Box::new(ElasticsearchBackend::new(config.elasticsearch.clone())?)
        }
        BackendKind::Memory => Box::new(InMemoryBackend::new()),
    };
    Ok(backend)
}

/// Build every configured backend, in configured order.
pub fn connect_all(config: &Config) -> Result<Vec<Box<dyn SearchBackend>>> {
    config
        .benchmark
        .backends
        .iter()
        .map(|kind| connect(*kind, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_names() {
        assert_eq!(BackendKind::Postgres.to_string(), "postgres");
        assert_eq!(BackendKind::Elasticsearch.to_string(), "elasticsearch");
        assert_eq!(BackendKind::Memory.as_str(), "memory");
    }

    #[tokio::test]
    async fn test_connect_all_keeps_configured_order() {
        let config = Config::default_config().with_backends(&[
            BackendKind::Memory,
            BackendKind::Elasticsearch,
            BackendKind::Postgres,
        ]);

        let backends = connect_all(&config).unwrap();
        let names: Vec<&str> = backends.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["memory", "elasticsearch", "postgres"]);
    }
}
