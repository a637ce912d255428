//! Benchmark orchestrator
//!
//! Runs the configured primitives in order, repeats each run as requested,
//! and hands the collected results to the reporter.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::runner::{BenchmarkResult, BenchmarkRunner};
use crate::config::BenchConfig;
use crate::metrics::{summarize, PrimitiveSummary};
use crate::primitives::PrimitiveKind;
use crate::utils::Result;

/// Benchmark orchestrator
pub struct Orchestrator {
    config: BenchConfig,
    runner: BenchmarkRunner,
}

impl Orchestrator {
    pub fn new(config: BenchConfig) -> Self {
        let runner = BenchmarkRunner::from_config(&config);
        Self { config, runner }
    }

    /// Total number of runs `run_all` will perform
    pub fn planned_runs(&self) -> u64 {
        self.config.primitives.len() as u64 * u64::from(self.config.repeat)
    }

    /// Run one primitive `repeat` times, ticking `progress` after each run
    pub fn run_primitive(
        &self,
        kind: PrimitiveKind,
        progress: &ProgressBar,
    ) -> Result<Vec<BenchmarkResult>> {
        progress.set_message(kind.as_str());
        (1..=self.config.repeat)
            .map(|repetition| {
                let result = self.runner.run(kind)?;
                info!(
                    "{} run {}/{}: {}us",
                    result.name, repetition, self.config.repeat, result.elapsed_micros
                );
                progress.inc(1);
                Ok(result)
            })
            .collect()
    }

    /// Run every configured primitive; results keep benchmark order
    pub fn run_all(&self) -> Result<Vec<BenchmarkResult>> {
        let progress = self.progress_bar();
        let mut results = Vec::with_capacity(self.planned_runs() as usize);

        for &kind in &self.config.primitives {
            results.extend(self.run_primitive(kind, &progress)?);
        }

        progress.finish_and_clear();
        Ok(results)
    }

    /// Aggregate repeated runs per primitive
    pub fn summarize(&self, results: &[BenchmarkResult]) -> Vec<PrimitiveSummary> {
        summarize(results)
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.config.quiet || !self.config.output_format.is_text() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(self.planned_runs());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    fn config(primitives: Vec<PrimitiveKind>, repeat: u32) -> BenchConfig {
        BenchConfig {
            threads: 2,
            operations: 40,
            primitives,
            permits: 1,
            repeat,
            output_format: OutputFormat::Text,
            output_path: None,
            quiet: true,
            verbose: false,
        }
    }

    #[test]
    fn test_run_all_order_and_repeats() {
        let orchestrator = Orchestrator::new(config(
            vec![PrimitiveKind::Monitor, PrimitiveKind::Mutex],
            2,
        ));
        assert_eq!(orchestrator.planned_runs(), 4);

        let results = orchestrator.run_all().unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Monitor", "Monitor", "Mutex", "Mutex"]);
        assert!(results.iter().all(|r| r.critical_sections == 40));
    }

    #[test]
    fn test_run_primitive_repeats() {
        let orchestrator = Orchestrator::new(config(vec![PrimitiveKind::Barrier], 3));
        let results = orchestrator
            .run_primitive(PrimitiveKind::Barrier, &ProgressBar::hidden())
            .unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.critical_sections == 80));
    }

    #[test]
    fn test_every_primitive_in_canonical_order() {
        let orchestrator = Orchestrator::new(config(PrimitiveKind::ALL.to_vec(), 1));
        let results = orchestrator.run_all().unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mutex", "Semaphore", "Barrier", "SpinLock", "SpinWait", "Monitor"]
        );
    }

    #[test]
    fn test_summaries_follow_run_order() {
        let orchestrator = Orchestrator::new(config(
            vec![PrimitiveKind::SpinWait, PrimitiveKind::SpinLock],
            2,
        ));
        let results = orchestrator.run_all().unwrap();
        let summaries = orchestrator.summarize(&results);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "SpinWait");
        assert_eq!(summaries[0].runs, 2);
        assert_eq!(summaries[1].name, "SpinLock");
    }
}
