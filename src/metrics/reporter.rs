//! Metrics reporter - output formatting and export
//!
//! Supports multiple output formats:
//! - Text (fixed-width tables)
//! - JSON
//! - CSV

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::summary::PrimitiveSummary;
use crate::benchmark::BenchmarkResult;
use crate::config::OutputFormat;
use crate::utils::Result;

const NAME_WIDTH: usize = 12;
const TIME_WIDTH: usize = 12;
const RATE_WIDTH: usize = 14;

/// Metrics reporter
pub struct MetricsReporter {
    format: OutputFormat,
}

impl MetricsReporter {
    /// Create new reporter with specified format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render results in the configured format
    ///
    /// The text format adds a summary table when any primitive ran more than
    /// once.
    pub fn render(
        &self,
        config_summary: &str,
        results: &[BenchmarkResult],
        summaries: &[PrimitiveSummary],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Text => {
                let mut out = render_table(results);
                if summaries.iter().any(|s| s.runs > 1) {
                    out.push('\n');
                    out.push_str(&render_summary_table(summaries));
                }
                Ok(out)
            }
            OutputFormat::Json => render_json(config_summary, results, summaries),
            OutputFormat::Csv => Ok(render_csv(results)),
        }
    }

    /// Render and write to `path`, or stdout when no path is given
    pub fn report(
        &self,
        config_summary: &str,
        results: &[BenchmarkResult],
        summaries: &[PrimitiveSummary],
        path: Option<&Path>,
    ) -> Result<()> {
        let rendered = self.render(config_summary, results, summaries)?;
        match path {
            Some(path) => write_file(path, &rendered)?,
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(rendered.as_bytes())?;
                handle.flush()?;
            }
        }
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Digits grouped in threes: `1234567` -> `1,234,567`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole operations per second, grouped like [`format_count`]
pub fn format_throughput(ops_per_sec: f64) -> String {
    format_count(ops_per_sec as u64)
}

/// Fixed-width table: one row per run, in benchmark order
pub fn render_table(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("Results (time in microseconds)\n");
    out.push_str(&format!(
        "{:>nw$} | {:>tw$} | {:>rw$}\n",
        "Primitive",
        "Time (us)",
        "Ops/s",
        nw = NAME_WIDTH,
        tw = TIME_WIDTH,
        rw = RATE_WIDTH
    ));
    out.push_str(&"-".repeat(NAME_WIDTH + TIME_WIDTH + RATE_WIDTH + 6));
    out.push('\n');

    for r in results {
        out.push_str(&format!(
            "{:>nw$} | {:>tw$} | {:>rw$}\n",
            r.name,
            r.elapsed_micros,
            format_throughput(r.throughput()),
            nw = NAME_WIDTH,
            tw = TIME_WIDTH,
            rw = RATE_WIDTH
        ));
    }
    out
}

/// Per-primitive statistics over repeated runs
pub fn render_summary_table(summaries: &[PrimitiveSummary]) -> String {
    let mut out = String::new();
    out.push_str("Summary over repeated runs (microseconds)\n");
    out.push_str(&format!(
        "{:>12} {:>6} {:>12} {:>12} {:>12} {:>12}\n",
        "Primitive", "Runs", "Min", "Mean", "p50", "Max"
    ));
    out.push_str(&"-".repeat(71));
    out.push('\n');

    for s in summaries {
        out.push_str(&format!(
            "{:>12} {:>6} {:>12} {:>12} {:>12} {:>12}\n",
            s.name,
            s.runs,
            format_count(s.min_us),
            format_count(s.mean_us as u64),
            format_count(s.p50_us),
            format_count(s.max_us)
        ));
    }
    out
}

pub fn render_json(
    config_summary: &str,
    results: &[BenchmarkResult],
    summaries: &[PrimitiveSummary],
) -> Result<String> {
    let json = serde_json::json!({
        "config": config_summary,
        "results": results,
        "summaries": summaries,
    });
    let mut out = serde_json::to_string_pretty(&json)?;
    out.push('\n');
    Ok(out)
}

pub fn render_csv(results: &[BenchmarkResult]) -> String {
    let mut out = String::from("primitive,elapsed_us,workers,critical_sections,ops_per_sec\n");
    for r in results {
        out.push_str(&format!(
            "{},{},{},{},{:.2}\n",
            r.name,
            r.elapsed_micros,
            r.workers,
            r.critical_sections,
            r.throughput()
        ));
    }
    out
}
