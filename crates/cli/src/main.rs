//! Verification harness CLI.
//!
//! This binary drives the harness end to end without hardware attached. It
//! performs:
//! 1. **Sweep:** Run a verification sweep against the simulated square-root device, persist the transcript and CSV artifacts, and print the summary table.
//! 2. **Analyze:** Reload a stored transcript and re-score it under declared tolerances, without re-running the device.
//!
//! A physical link is attached by implementing the core `Channel` trait;
//! this binary only ships the simulated device.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rootcheck_core::config::{Config, TimeoutPolicy};
use rootcheck_core::link::sim::{RoundingMode, SqrtDeviceSim};
use rootcheck_core::sweep::{self, CancelToken, SweepController};
use rootcheck_core::{
    LatencyAnalyzer, PrecisionAnalyzer, SqrtReference, SweepResult, summarize,
};

mod export;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "rootcheck",
    version,
    about = "Verification harness for a Q8.8 fixed-point square-root unit",
    long_about = "Run a verification sweep against the simulated device, or re-analyze a stored transcript.\n\nExamples:\n  rootcheck sweep --limit 1000\n  rootcheck sweep --mode nearest --on-timeout skip --drop-at 42\n  rootcheck analyze transcript.json --tolerance 2 --tolerance 8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a verification sweep against the simulated device.
    Sweep(SweepArgs),
    /// Re-analyze a stored transcript under declared tolerances.
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct SweepArgs {
    /// Quantization mode of the simulated unit (nearest or truncate).
    #[arg(long, default_value = "truncate")]
    mode: RoundingMode,

    /// Include zero in the input domain.
    #[arg(long)]
    include_zero: bool,

    /// Limit the sweep to the first N inputs of the domain.
    #[arg(long)]
    limit: Option<usize>,

    /// Per-transaction response timeout in milliseconds.
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// What the sweep does when a transaction times out.
    #[arg(long, value_enum, default_value_t = PolicyArg::Abort)]
    on_timeout: PolicyArg,

    /// Artificial device response latency in microseconds.
    #[arg(long, default_value_t = 0)]
    device_latency_us: u64,

    /// Drop the device response at this request index (repeatable).
    #[arg(long = "drop-at")]
    drop_at: Vec<usize>,

    /// Tolerance threshold in LSB (repeatable; default 2 and 10).
    #[arg(long = "tolerance")]
    tolerance_lsb: Vec<f64>,

    /// Where to write the transcript JSON.
    #[arg(long, default_value = "transcript.json")]
    transcript: PathBuf,

    /// Where to write the per-transaction results CSV.
    #[arg(long, default_value = "test_results.csv")]
    results_csv: PathBuf,

    /// Where to write the per-transaction latency CSV.
    #[arg(long, default_value = "latency_results.csv")]
    latency_csv: PathBuf,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Transcript JSON produced by `sweep`.
    transcript: PathBuf,

    /// Tolerance threshold in LSB (repeatable; default 2 and 10).
    #[arg(long = "tolerance")]
    tolerance_lsb: Vec<f64>,

    /// Where to write the summary CSV, if anywhere.
    #[arg(long)]
    summary_csv: Option<PathBuf>,
}

/// Timeout policy as a CLI value.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Stop the sweep at the first timeout.
    Abort,
    /// Record the timeout and continue scanning.
    Skip,
}

impl From<PolicyArg> for TimeoutPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Abort => Self::Abort,
            PolicyArg::Skip => Self::SkipAndContinue,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Sweep(args) => run_sweep(&args),
        Commands::Analyze(args) => run_analyze(&args),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        process::exit(1);
    }
}

/// Runs a sweep on the simulated device, writes the artifacts, prints the
/// summary.
fn run_sweep(args: &SweepArgs) -> Result<(), Box<dyn Error>> {
    let mut config = Config::default();
    config.link.response_timeout_ms = args.timeout_ms;
    config.sweep.on_timeout = args.on_timeout.into();
    if !args.tolerance_lsb.is_empty() {
        config.analysis.tolerance_lsb = args.tolerance_lsb.clone();
    }

    let mut inputs = if args.include_zero {
        sweep::full_domain()
    } else {
        sweep::nonzero_domain()
    };
    if let Some(limit) = args.limit {
        inputs.truncate(limit);
    }

    let mut device = SqrtDeviceSim::new(args.mode)
        .with_response_latency(Duration::from_micros(args.device_latency_us))
        .with_dropped_responses(&args.drop_at);

    let result = SweepController::new(&config).run(
        &inputs,
        &mut device,
        Some(&SqrtReference),
        &CancelToken::new(),
    )?;

    export::write_transcript(&args.transcript, &result)?;
    let pass_tolerance = config.analysis.tolerance_lsb.first().copied().unwrap_or(2.0);
    export::write_results_csv(&args.results_csv, &result, pass_tolerance)?;
    export::write_latency_csv(&args.latency_csv, &result)?;

    let precision =
        PrecisionAnalyzer.analyze(&result, &SqrtReference, &config.analysis.tolerance_lsb);
    let latency = LatencyAnalyzer.analyze(&result);
    render::print_table(&summarize(&result, &precision, &latency));

    println!();
    println!("Transcript: {}", args.transcript.display());
    println!("Results:    {}", args.results_csv.display());
    println!("Latency:    {}", args.latency_csv.display());
    Ok(())
}

/// Reloads a transcript and re-scores it under the declared tolerances.
fn run_analyze(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let file = File::open(&args.transcript)?;
    let result: SweepResult = serde_json::from_reader(BufReader::new(file))?;

    let tolerances = if args.tolerance_lsb.is_empty() {
        Config::default().analysis.tolerance_lsb
    } else {
        args.tolerance_lsb.clone()
    };

    let precision = PrecisionAnalyzer.analyze(&result, &SqrtReference, &tolerances);
    let latency = LatencyAnalyzer.analyze(&result);
    let table = summarize(&result, &precision, &latency);
    render::print_table(&table);

    if let Some(path) = &args.summary_csv {
        export::write_summary_csv(path, &table)?;
        println!();
        println!("Summary: {}", path.display());
    }
    Ok(())
}
