// file: src/utils/telemetry.rs
// description: phase timing helpers for benchmark runs

use std::time::{Duration, Instant};
use tracing::info;

/// Logs the start and end of one benchmark phase against one backend.
pub struct PhaseTimer {
    phase: String,
    start: Instant,
}

impl PhaseTimer {
    pub fn start(backend: &str, phase: &str) -> Self {
        let phase = format!("{} {}", backend, phase);
        info!("{} started", phase);
        Self {
            phase,
            start: Instant::now(),
        }
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.start.elapsed();
        info!("{} finished in {:?}", self.phase, elapsed);
        elapsed
    }

    /// Like `finish`, also logging throughput for `documents`.
    pub fn finish_documents(self, documents: usize) -> Duration {
        let elapsed = self.start.elapsed();
        info!(
            "{} finished: {} documents in {:?} ({:.1} docs/sec)",
            self.phase,
            documents,
            elapsed,
            docs_per_sec(documents, elapsed)
        );
        elapsed
    }
}

fn docs_per_sec(documents: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { documents as f64 / secs } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_timer_measures_elapsed() {
        let timer = PhaseTimer::start("memory", "setup");
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.finish() >= Duration::from_millis(10));
    }

    #[test]
    fn test_docs_per_sec() {
        assert_eq!(docs_per_sec(4, Duration::from_secs(2)), 2.0);
        assert_eq!(docs_per_sec(4, Duration::ZERO), 0.0);
        assert_eq!(docs_per_sec(0, Duration::from_millis(5)), 0.0);
    }
}
