//! Aggregation of repeated runs of the same primitive

use hdrhistogram::Histogram;
use serde::Serialize;

use crate::benchmark::BenchmarkResult;

/// Elapsed-time statistics over every run of one primitive
#[derive(Debug, Clone, Serialize)]
pub struct PrimitiveSummary {
    pub name: String,
    pub runs: u64,
    pub min_us: u64,
    pub mean_us: f64,
    pub p50_us: u64,
    pub max_us: u64,
}

/// Group results by primitive name (first-appearance order) and summarize
pub fn summarize(results: &[BenchmarkResult]) -> Vec<PrimitiveSummary> {
    let mut names: Vec<&str> = Vec::new();
    for result in results {
        if !names.contains(&result.name.as_str()) {
            names.push(&result.name);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let elapsed: Vec<u64> = results
                .iter()
                .filter(|r| r.name == name)
                .map(|r| r.elapsed_micros)
                .collect();
            summarize_one(name, &elapsed)
        })
        .collect()
}

fn summarize_one(name: &str, elapsed: &[u64]) -> PrimitiveSummary {
    let mut histogram =
        Histogram::<u64>::new_with_bounds(1, 3_600_000_000, 3).expect("valid histogram bounds");
    for &us in elapsed {
        histogram.saturating_record(us);
    }

    let runs = elapsed.len() as u64;
    let mean_us = if runs == 0 {
        0.0
    } else {
        elapsed.iter().sum::<u64>() as f64 / runs as f64
    };

    PrimitiveSummary {
        name: name.to_string(),
        runs,
        min_us: elapsed.iter().copied().min().unwrap_or(0),
        mean_us,
        p50_us: histogram.value_at_quantile(0.5),
        max_us: elapsed.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, elapsed_micros: u64) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            elapsed_micros,
            workers: 6,
            critical_sections: 100,
        }
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let results = vec![
            result("SpinLock", 30),
            result("Mutex", 10),
            result("SpinLock", 50),
            result("Mutex", 20),
        ];
        let summaries = summarize(&results);
        let names: Vec<_> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["SpinLock", "Mutex"]);
        assert_eq!(summaries[0].runs, 2);
        assert_eq!(summaries[1].runs, 2);
    }

    #[test]
    fn test_statistics() {
        let results: Vec<_> = [100, 200, 300, 400, 500]
            .iter()
            .map(|&us| result("Monitor", us))
            .collect();
        let summary = &summarize(&results)[0];
        assert_eq!(summary.min_us, 100);
        assert_eq!(summary.max_us, 500);
        assert_eq!(summary.mean_us, 300.0);
        assert!((299..=301).contains(&summary.p50_us), "p50 {}", summary.p50_us);
    }

    #[test]
    fn test_zero_elapsed_runs() {
        let summary = &summarize(&[result("Mutex", 0)])[0];
        assert_eq!(summary.min_us, 0);
        assert_eq!(summary.max_us, 0);
        assert_eq!(summary.mean_us, 0.0);
    }

    #[test]
    fn test_empty() {
        assert!(summarize(&[]).is_empty());
    }
}
