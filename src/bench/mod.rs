// file: src/bench/mod.rs
// description: benchmark driver module exports
// reference: internal module structure

pub mod driver;
pub mod progress;

pub use driver::{BenchmarkDriver, SetupStatus};
pub use progress::{IngestProgress, IngestStats};
