//! lockbench - throughput benchmark for hand-built synchronization primitives
//!
//! Runs each selected primitive with a fixed worker pool and reports the
//! wall-clock time of every run.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use lockbench::benchmark::Orchestrator;
use lockbench::config::{BenchConfig, CliArgs};
use lockbench::metrics::MetricsReporter;

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn print_banner(config: &BenchConfig) {
    if config.quiet || !config.output_format.is_text() {
        return;
    }

    println!("lockbench v{}", env!("CARGO_PKG_VERSION"));
    println!("====================================");
    println!("Threads: {}, Operations: {}", config.threads, config.operations);
    println!(
        "Primitives: {}",
        config
            .primitives
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if config.repeat > 1 {
        println!("Repeat: {}", config.repeat);
    }
    println!("====================================\n");
}

fn run() -> Result<()> {
    let args = CliArgs::parse_args();

    setup_logging(args.verbose, args.quiet);

    let config = BenchConfig::from_cli(&args)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    print_banner(&config);

    let orchestrator = Orchestrator::new(config.clone());
    let results = orchestrator.run_all()?;
    let summaries = orchestrator.summarize(&results);

    if let Some(ref path) = config.output_path {
        info!("Writing results to: {:?}", path);
    }
    MetricsReporter::new(config.output_format).report(
        &config.summary(),
        &results,
        &summaries,
        config.output_path.as_deref(),
    )?;

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
