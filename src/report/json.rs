// file: src/report/json.rs
// description: json rendering of a benchmark report for machine consumption

use crate::error::Result;
use crate::models::{BenchmarkReport, QueryOutcome};
use chrono::Utc;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub ingest: Vec<JsonIngest>,
    pub queries: Vec<JsonQuery>,
    pub aborted: Vec<JsonAborted>,
}

#[derive(Debug, Serialize)]
pub struct JsonIngest {
    pub backend: String,
    pub indexed: usize,
    pub failed: usize,
    pub duration_us: u128,
}

#[derive(Debug, Serialize)]
pub struct JsonQuery {
    pub text: String,
    pub limit: usize,
    pub results: Vec<JsonBackendResult>,
}

#[derive(Debug, Serialize)]
pub struct JsonBackendResult {
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_us: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JsonAborted {
    pub backend: String,
    pub message: String,
}

impl JsonReport {
    pub fn from_report(report: &BenchmarkReport) -> Self {
        let ingest = report
            .runs
            .iter()
            .map(|run| JsonIngest {
                backend: run.backend.clone(),
                indexed: run.ingest.documents_indexed,
                failed: run.ingest.documents_failed,
                duration_us: run.ingest.duration.as_micros(),
            })
            .collect();

        let queries = report
            .queries
            .iter()
            .enumerate()
            .map(|(idx, query)| JsonQuery {
                text: query.text.clone(),
                limit: query.limit,
                results: report
                    .runs
                    .iter()
                    .filter_map(|run| {
                        let outcome = run.outcomes.get(idx)?;
                        Some(match outcome {
                            QueryOutcome::Completed(result) => JsonBackendResult {
                                backend: run.backend.clone(),
                                duration_us: Some(result.elapsed.as_micros()),
                                titles: Some(result.titles.clone()),
                                error: None,
                            },
                            QueryOutcome::Failed(message) => JsonBackendResult {
                                backend: run.backend.clone(),
                                duration_us: None,
                                titles: None,
                                error: Some(message.clone()),
                            },
                        })
                    })
                    .collect(),
            })
            .collect();

        let aborted = report
            .aborted
            .iter()
            .map(|a| JsonAborted {
                backend: a.backend.clone(),
                message: a.message.clone(),
            })
            .collect();

        Self {
            generated_at: Utc::now().to_rfc3339(),
            ingest,
            queries,
            aborted,
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *out, self)?;
        } else {
            serde_json::to_writer(&mut *out, self)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
