// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

pub mod backend;
pub mod bench;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

pub use backend::{
    BackendKind, ElasticsearchBackend, InMemoryBackend, PostgresBackend, SearchBackend,
};
pub use bench::{BenchmarkDriver, IngestStats, SetupStatus};
pub use config::{BenchmarkConfig, Config, ElasticsearchConfig, PostgresConfig, QueryParser};
pub use error::{BenchError, Result};
pub use models::{
    AbortedBackend, BenchmarkReport, BenchmarkRun, Document, QueryOutcome, QuerySpec,
    SearchResult,
};
pub use report::{JsonReport, ReportFormat, ReportPrinter};
pub use utils::{PhaseTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let config = Config::default_config();
        let _driver = BenchmarkDriver::from_config(&config.benchmark);
        let _printer = ReportPrinter::new(false);
    }
}
