//! Benchmark configuration derived from CLI arguments

use std::path::PathBuf;

use super::cli::{CliArgs, OutputFormat};
use crate::primitives::PrimitiveKind;

/// Complete benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchConfig {
    // Workload
    pub threads: usize,
    pub operations: u64,
    pub primitives: Vec<PrimitiveKind>,
    pub permits: usize,
    pub repeat: u32,

    // Output
    pub output_format: OutputFormat,
    pub output_path: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

impl BenchConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        args.validate()?;

        Ok(Self {
            threads: args.effective_threads(),
            operations: args.operations,
            primitives: args.selected_primitives()?,
            permits: args.permits,
            repeat: args.repeat,

            output_format: args.output_format,
            output_path: args.output.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// One-line description used in report headers
    pub fn summary(&self) -> String {
        format!(
            "threads={}, operations={}, permits={}, repeat={}",
            self.threads, self.operations, self.permits, self.repeat
        )
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            threads: 6,
            operations: 1_000_000,
            primitives: PrimitiveKind::ALL.to_vec(),
            permits: 1,
            repeat: 1,
            output_format: OutputFormat::Text,
            output_path: None,
            quiet: false,
            verbose: false,
        }
    }
}
