// file: src/report/text.rs
// description: line-oriented console rendering of a benchmark report

use crate::bench::SetupStatus;
use crate::error::Result;
use crate::models::{BenchmarkReport, QueryOutcome};
use crate::utils::logging::{format_error, format_success, format_warning};
use colored::Colorize;
use std::io::Write;

const SEPARATOR: &str = "---";

pub struct ReportPrinter {
    colored: bool,
}

impl ReportPrinter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn print<W: Write>(&self, report: &BenchmarkReport, out: &mut W) -> Result<()> {
        for run in report.runs.iter().filter(|r| r.ingest.attempted() > 0) {
            writeln!(
                out,
                "{} indexed {}/{} documents ({:.1}%) (Duration: {:?})",
                run.backend,
                run.ingest.documents_indexed,
                run.ingest.attempted(),
                run.ingest.success_rate(),
                run.ingest.duration
            )?;
        }
        if report.runs.iter().any(|r| r.ingest.attempted() > 0) {
            writeln!(out)?;
        }

        for (idx, query) in report.queries.iter().enumerate() {
            writeln!(out, "{}", self.header(&format!("Searching for: {}", query.text)))?;

            for (n, run) in report.runs.iter().enumerate() {
                if n > 0 {
                    writeln!(out)?;
                }
                match run.outcomes.get(idx) {
                    Some(QueryOutcome::Completed(result)) => {
                        writeln!(
                            out,
                            "{} Results (Duration: {:?}):",
                            self.label(&run.backend),
                            result.elapsed
                        )?;
                        for title in &result.titles {
                            writeln!(out, "{}", title)?;
                        }
                    }
                    Some(QueryOutcome::Failed(message)) => {
                        writeln!(out, "{}", self.error(message))?;
                    }
                    None => {
                        writeln!(out, "{} did not run this query", self.label(&run.backend))?;
                    }
                }
            }

            writeln!(out, "{}", SEPARATOR)?;
        }

        for aborted in &report.aborted {
            let line = format!("{} skipped: {}", aborted.backend, aborted.message);
            writeln!(out, "{}", self.warning(&line))?;
        }

        Ok(())
    }

    pub fn print_setup<W: Write>(&self, statuses: &[SetupStatus], out: &mut W) -> Result<()> {
        for status in statuses {
            let line = match &status.error {
                None => {
                    let msg = format!("{} ready", status.backend);
                    if self.colored { format_success(&msg) } else { msg }
                }
                Some(message) => self.error(message),
            };
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    fn header(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, backend: &str) -> String {
        if self.colored {
            backend.cyan().bold().to_string()
        } else {
            backend.to_string()
        }
    }

    fn error(&self, message: &str) -> String {
        if self.colored {
            format_error(message)
        } else {
            message.to_string()
        }
    }

    fn warning(&self, message: &str) -> String {
        if self.colored {
            format_warning(message)
        } else {
            message.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::IngestStats;
    use crate::models::{AbortedBackend, BenchmarkRun, QuerySpec, SearchResult};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn completed(titles: &[&str], micros: u64) -> QueryOutcome {
        QueryOutcome::Completed(SearchResult::new(
            titles.iter().map(|t| t.to_string()).collect(),
            Duration::from_micros(micros),
        ))
    }

    fn render(report: &BenchmarkReport) -> String {
        let mut out = Vec::new();
        ReportPrinter::new(false).print(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_query_sections_list_every_backend() {
        let mut report = BenchmarkReport::new(vec![
            QuerySpec::new("technology", 10),
            QuerySpec::new("machine learning", 10),
        ]);

        let mut postgres = BenchmarkRun::new("postgres", IngestStats::default());
        postgres.outcomes = vec![
            completed(&["Tech Innovation"], 1500),
            QueryOutcome::Failed("postgres search failed: syntax error in tsquery".to_string()),
        ];
        let mut elastic = BenchmarkRun::new("elasticsearch", IngestStats::default());
        elastic.outcomes = vec![
            completed(&[], 3000),
            completed(&["Machine Learning", "Tech Innovation"], 2000),
        ];
        report.runs = vec![postgres, elastic];

        assert_eq!(
            render(&report),
            "Searching for: technology\n\
             postgres Results (Duration: 1.5ms):\n\
             Tech Innovation\n\
             \n\
             elasticsearch Results (Duration: 3ms):\n\
             ---\n\
             Searching for: machine learning\n\
             postgres search failed: syntax error in tsquery\n\
             \n\
             elasticsearch Results (Duration: 2ms):\n\
             Machine Learning\n\
             Tech Innovation\n\
             ---\n"
        );
    }

    #[test]
    fn test_ingest_summary_and_aborted_backends() {
        let mut report = BenchmarkReport::new(vec![QuerySpec::new("technology", 10)]);

        let mut memory = BenchmarkRun::new(
            "memory",
            IngestStats {
                documents_indexed: 1,
                documents_failed: 1,
                duration: Duration::from_millis(4),
            },
        );
        memory.outcomes = vec![completed(&["Tech Innovation"], 10)];
        report.runs.push(memory);
        report.aborted.push(AbortedBackend {
            backend: "postgres".to_string(),
            message: "postgres setup failed: connection refused".to_string(),
        });

        assert_eq!(
            render(&report),
            "memory indexed 1/2 documents (50.0%) (Duration: 4ms)\n\
             \n\
             Searching for: technology\n\
             memory Results (Duration: 10µs):\n\
             Tech Innovation\n\
             ---\n\
             postgres skipped: postgres setup failed: connection refused\n"
        );
    }

    #[test]
    fn test_print_setup_statuses() {
        let statuses = vec![
            SetupStatus {
                backend: "memory".to_string(),
                error: None,
            },
            SetupStatus {
                backend: "elasticsearch".to_string(),
                error: Some("elasticsearch setup failed: status 401".to_string()),
            },
        ];

        let mut out = Vec::new();
        ReportPrinter::new(false)
            .print_setup(&statuses, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "memory ready\nelasticsearch setup failed: status 401\n"
        );
    }
}
