//! Benchmark harness
//!
//! - partition: even contiguous split of the operation count across workers
//! - timing: wall-clock timing of a unit of work
//! - runner: drives one primitive with a fixed worker pool
//! - orchestrator: runs the configured primitive set and repeats

pub mod orchestrator;
pub mod partition;
pub mod runner;
pub mod timing;

pub use orchestrator::Orchestrator;
pub use partition::{partition, WorkRange};
pub use runner::{run, BenchmarkResult, BenchmarkRunner};
pub use timing::timed;
