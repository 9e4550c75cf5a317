// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use fts_bench::utils::logging::{format_info, format_warning};
use fts_bench::{BackendKind, BenchmarkDriver, Config, QuerySpec, ReportFormat, ReportPrinter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fts_bench")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Benchmark PostgreSQL full-text search against Elasticsearch", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up each backend, index the corpus, run every query and print the report
    Run {
        /// Backends to benchmark, overriding the configured list
        #[arg(short, long = "backend", value_enum)]
        backends: Vec<BackendKind>,

        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        #[arg(long)]
        no_progress: bool,
    },

    /// Create tables and indexes without indexing or querying
    Setup {
        #[arg(short, long = "backend", value_enum)]
        backends: Vec<BackendKind>,
    },

    /// Run one query against data already stored in each backend
    Search {
        /// Search query text
        query: String,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        #[arg(short, long = "backend", value_enum)]
        backends: Vec<BackendKind>,

        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    fts_bench::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Full-text search benchmark");
    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    match cli.command {
        Commands::Run {
            backends,
            format,
            no_progress,
        } => {
            cmd_run(&config.with_backends(&backends), format, cli.color, !no_progress).await?;
        }
        Commands::Setup { backends } => {
            cmd_setup(&config.with_backends(&backends), cli.color).await?;
        }
        Commands::Search {
            query,
            limit,
            backends,
            format,
        } => {
            let query = QuerySpec::new(query, limit);
            cmd_search(&config.with_backends(&backends), query, format, cli.color).await?;
        }
    }

    Ok(())
}

async fn cmd_run(config: &Config, format: ReportFormat, color: bool, progress: bool) -> Result<()> {
    info!(
        "Benchmarking {} backend(s) with {} documents and {} queries",
        config.benchmark.backends.len(),
        config.benchmark.corpus.len(),
        config.benchmark.queries.len()
    );
    let start_time = Instant::now();

    let backends =
        fts_bench::backend::connect_all(config).context("Failed to create backend clients")?;
    let driver = BenchmarkDriver::from_config(&config.benchmark).with_progress(progress);

    let report = driver.run_all(&backends).await;

    let mut stdout = io::stdout().lock();
    fts_bench::report::render(&report, format, color, &mut stdout)
        .context("Failed to write report")?;
    stdout.flush()?;

    info!(
        "Benchmark complete in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    if report.all_aborted() {
        return Err(anyhow::anyhow!(
            "No backend could be set up ({} attempted)",
            report.aborted.len()
        ));
    }

    Ok(())
}

async fn cmd_setup(config: &Config, color: bool) -> Result<()> {
    info!("Running setup only");

    let backends =
        fts_bench::backend::connect_all(config).context("Failed to create backend clients")?;
    let statuses = BenchmarkDriver::setup_only(&backends).await;

    let mut stdout = io::stdout().lock();
    ReportPrinter::new(color)
        .print_setup(&statuses, &mut stdout)
        .context("Failed to write setup status")?;

    let failed = statuses.iter().filter(|s| s.error.is_some()).count();
    if failed > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} backends failed setup",
            failed,
            statuses.len()
        ));
    }

    Ok(())
}

async fn cmd_search(
    config: &Config,
    query: QuerySpec,
    format: ReportFormat,
    color: bool,
) -> Result<()> {
    info!("Searching for: {}", query.text);

    let backends =
        fts_bench::backend::connect_all(config).context("Failed to create backend clients")?;
    if backends.iter().any(|b| b.name() == BackendKind::Memory.as_str()) {
        eprintln!(
            "{}",
            format_warning("memory backend holds no data between runs; it will return nothing")
        );
    }

    let driver = BenchmarkDriver::new(Vec::new(), vec![query]);
    let report = driver.search_only(&backends).await;

    let mut stdout = io::stdout().lock();
    fts_bench::report::render(&report, format, color, &mut stdout)
        .context("Failed to write report")?;

    let failed = report.runs.iter().map(|r| r.failed_queries()).sum::<usize>();
    if failed > 0 {
        eprintln!("{}", format_info(&format!("{} backend(s) failed the query", failed)));
    }

    Ok(())
}
