//! Command-line argument parsing
//!
//! Defaults reproduce the classic run: six threads, one million operations,
//! all six primitives in canonical order, printed as a table.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::primitives::PrimitiveKind;

/// Throughput benchmark for hand-built locks, semaphores and barriers
#[derive(Parser, Debug, Clone)]
#[command(name = "lockbench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Workload =====
    /// Number of worker threads (0 = one per available CPU)
    #[arg(long = "threads", default_value_t = 6)]
    pub threads: usize,

    /// Total critical sections per partitioned run (barrier: phases per worker)
    #[arg(short = 'n', long = "operations", default_value_t = 1_000_000)]
    pub operations: u64,

    /// Primitives to benchmark, comma separated
    /// (mutex, semaphore, barrier, spinlock, spinwait, monitor)
    #[arg(short = 't', long = "primitives", value_delimiter = ',')]
    pub primitives: Option<Vec<String>>,

    /// Initial permits of the benchmarked semaphore
    #[arg(long = "permits", default_value_t = 1)]
    pub permits: usize,

    /// Runs per primitive; repeated runs are summarized (min/mean/p50/max)
    #[arg(long = "repeat", default_value_t = 1)]
    pub repeat: u32,

    // ===== Output Options =====
    /// Output format
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Write results to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format for results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.permits == 0 {
            return Err("--permits must be at least 1".to_string());
        }

        if self.repeat == 0 {
            return Err("--repeat must be at least 1".to_string());
        }

        if self.quiet && self.verbose {
            return Err("--quiet and --verbose are mutually exclusive".to_string());
        }

        self.selected_primitives()?;
        Ok(())
    }

    /// Primitives to run, in the order given (all six if none given)
    pub fn selected_primitives(&self) -> Result<Vec<PrimitiveKind>, String> {
        match self.primitives {
            None => Ok(PrimitiveKind::ALL.to_vec()),
            Some(ref names) => {
                if names.is_empty() {
                    return Err("--primitives needs at least one name".to_string());
                }
                names
                    .iter()
                    .map(|name| {
                        PrimitiveKind::parse(name.trim())
                            .ok_or_else(|| format!("Unknown primitive: {}", name))
                    })
                    .collect()
            }
        }
    }

    /// Get effective number of threads (0 = auto-detect)
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        } else {
            self.threads
        }
    }
}
