//! Configuration module

pub mod benchmark_config;
pub mod cli;
pub mod demo_args;

pub use benchmark_config::BenchConfig;
pub use cli::{CliArgs, OutputFormat};
pub use demo_args::{PhilosophersArgs, StudentsArgs};
