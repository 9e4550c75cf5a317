// file: src/report/mod.rs
// description: benchmark report rendering module exports
// reference: internal module structure

pub mod json;
pub mod text;

pub use json::JsonReport;
pub use text::ReportPrinter;

use crate::error::Result;
use crate::models::BenchmarkReport;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render<W: Write>(
    report: &BenchmarkReport,
    format: ReportFormat,
    colored: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Text => ReportPrinter::new(colored).print(report, out),
        ReportFormat::Json => JsonReport::from_report(report).write(out, true),
    }
}
