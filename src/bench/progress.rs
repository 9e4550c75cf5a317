// file: src/bench/progress.rs
// description: ingestion progress bar and per-backend ingest counters
// reference: uses indicatif for progress bars and tracks ingestion counts

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestStats {
    pub documents_indexed: usize,
    pub documents_failed: usize,
    pub duration: Duration,
}

impl IngestStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempted(&self) -> usize {
        self.documents_indexed + self.documents_failed
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.attempted();
        if total == 0 {
            return 0.0;
        }
        (self.documents_indexed as f64 / total as f64) * 100.0
    }
}

pub struct IngestProgress {
    bar: ProgressBar,
    stats: IngestStats,
    start_time: Instant,
}

impl IngestProgress {
    pub fn new(backend: &str, total_documents: usize, visible: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_documents as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_prefix(backend.to_string());

        Self {
            bar,
            stats: IngestStats::new(),
            start_time: Instant::now(),
        }
    }

    pub fn inc_indexed(&mut self, title: &str) {
        self.stats.documents_indexed += 1;
        self.bar.set_message(title.to_string());
        self.bar.inc(1);
    }

    pub fn inc_failed(&mut self, title: &str) {
        self.stats.documents_failed += 1;
        self.bar.set_message(format!("failed: {}", title));
        self.bar.inc(1);
    }

    pub fn finish(mut self) -> IngestStats {
        self.stats.duration = self.start_time.elapsed();
        self.bar.finish_and_clear();
        self.stats
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{prefix:>13.bold} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_stats_success_rate() {
        let stats = IngestStats {
            documents_indexed: 9,
            documents_failed: 1,
            duration: Duration::ZERO,
        };
        assert_eq!(stats.attempted(), 10);
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
        assert_eq!(IngestStats::new().success_rate(), 0.0);
    }

    #[test]
    fn test_progress_counts() {
        let mut progress = IngestProgress::new("memory", 3, false);
        progress.inc_indexed("Tech Innovation");
        progress.inc_failed("Machine Learning");
        progress.inc_indexed("Data Science");

        let stats = progress.finish();
        assert_eq!(stats.documents_indexed, 2);
        assert_eq!(stats.documents_failed, 1);
    }
}
