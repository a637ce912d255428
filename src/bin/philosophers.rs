//! Dining philosophers demo
//!
//! Usage: philosophers [--cycles N]
//!
//! Five philosophers share five forks at a table with four seats. Every
//! state change is printed as it happens.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use lockbench::config::PhilosophersArgs;
use lockbench::demos::{run_dinner, DiningConfig};

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn run() -> Result<()> {
    let args = PhilosophersArgs::parse_args();
    setup_logging(args.verbose);
    args.validate()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let config = DiningConfig {
        cycles: args.cycles,
        think_ms: args.think_min_ms..=args.think_max_ms,
        eat_ms: args.eat_min_ms..=args.eat_max_ms,
        ..DiningConfig::default()
    };

    println!("=== Dining philosophers ===");
    println!(
        "{} philosophers, {} seats: the seat semaphore keeps one philosopher away from the table",
        config.philosophers, config.seats
    );
    println!("Each philosopher thinks and eats {} times\n", config.cycles);

    let report = run_dinner(&config)?;

    println!("\nAll philosophers have finished dinner.");
    info!(
        "{} meals, at most {} eating at once, {} neighbour conflicts",
        report.meals, report.max_concurrent_eaters, report.adjacent_conflicts
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
