//! Student filter: the same predicate run sequentially and across workers
//!
//! The parallel version splits the dataset with the benchmark's work
//! partitioner; each worker filters its slice into a local vector and the
//! slices are concatenated in worker order, so both versions return the same
//! names in the same order. No lock is involved.

use std::thread;

use tracing::debug;

use crate::benchmark::{partition, timed};
use crate::utils::{BenchError, Result};

/// Students with more debts than this are candidates for expulsion
pub const DEBTS_THRESHOLD: u32 = 3;

/// Worker count used when none is given
pub const DEFAULT_FILTER_THREADS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    /// Year of study, 1..=6
    pub course: i32,
    /// Outstanding exams, 0..=5
    pub debts: u32,
}

/// Synthetic dataset: `Student_1..Student_n`, uniform course and debts
pub fn generate_students(n: usize, rng: &mut fastrand::Rng) -> Vec<Student> {
    (1..=n)
        .map(|i| Student {
            name: format!("Student_{}", i),
            course: rng.i32(1..=6),
            debts: rng.u32(0..=5),
        })
        .collect()
}

/// More than [`DEBTS_THRESHOLD`] debts and a course above `course_threshold`
#[inline]
pub fn should_be_expelled(student: &Student, course_threshold: i32) -> bool {
    student.debts > DEBTS_THRESHOLD && student.course > course_threshold
}

pub fn filter_sequential(students: &[Student], course_threshold: i32) -> Vec<String> {
    filter_slice(students, course_threshold)
}

/// Filter with `threads` workers; result order matches [`filter_sequential`]
///
/// A worker panic is reported as `BenchError::Worker`.
pub fn filter_parallel(
    students: &[Student],
    course_threshold: i32,
    threads: usize,
) -> Result<Vec<String>> {
    if students.is_empty() {
        return Ok(Vec::new());
    }
    let threads = threads.max(1);
    let total = students.len() as u64;

    let parts = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|worker_id| {
                let range = partition(worker_id, threads, total).as_index_range();
                let slice = &students[range];
                s.spawn(move || filter_slice(slice, course_threshold))
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(worker_id, h)| {
                h.join().map_err(|_| {
                    BenchError::Worker(format!("filter-worker-{} panicked", worker_id))
                })
            })
            .collect::<Vec<_>>()
    });

    let mut result = Vec::new();
    for part in parts {
        result.extend(part?);
    }
    debug!("parallel filter: {} workers, {} matches", threads, result.len());
    Ok(result)
}

fn filter_slice(students: &[Student], course_threshold: i32) -> Vec<String> {
    students
        .iter()
        .filter(|s| should_be_expelled(s, course_threshold))
        .map(|s| s.name.clone())
        .collect()
}

/// Both filters' results and timings
#[derive(Debug, Clone)]
pub struct FilterReport {
    pub sequential: Vec<String>,
    pub sequential_us: u64,
    pub parallel: Vec<String>,
    pub parallel_us: u64,
    pub threads: usize,
}

/// Time the sequential filter, then the parallel one
pub fn compare_filters(
    students: &[Student],
    course_threshold: i32,
    threads: usize,
) -> Result<FilterReport> {
    let (sequential, sequential_us) = timed(|| filter_sequential(students, course_threshold));
    let (parallel, parallel_us) = timed(|| filter_parallel(students, course_threshold, threads));

    Ok(FilterReport {
        sequential,
        sequential_us,
        parallel: parallel?,
        parallel_us,
        threads: threads.max(1),
    })
}

/// Up to `max` names, one per line, with a trailer counting the rest
pub fn format_sample(names: &[String], max: usize) -> String {
    let mut out = String::new();
    for name in names.iter().take(max) {
        out.push_str(name);
        out.push('\n');
    }
    if names.len() > max {
        out.push_str(&format!("... and {} more students\n", names.len() - max));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, course: i32, debts: u32) -> Student {
        Student {
            name: name.to_string(),
            course,
            debts,
        }
    }

    #[test]
    fn test_generate_ranges_and_names() {
        let mut rng = fastrand::Rng::with_seed(42);
        let students = generate_students(500, &mut rng);
        assert_eq!(students.len(), 500);
        assert_eq!(students[0].name, "Student_1");
        assert_eq!(students[499].name, "Student_500");
        assert!(students.iter().all(|s| (1..=6).contains(&s.course)));
        assert!(students.iter().all(|s| s.debts <= 5));
    }

    #[test]
    fn test_generate_is_deterministic_with_seed() {
        let a = generate_students(50, &mut fastrand::Rng::with_seed(9));
        let b = generate_students(50, &mut fastrand::Rng::with_seed(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_predicate() {
        assert!(should_be_expelled(&student("a", 4, 4), 3));
        assert!(!should_be_expelled(&student("b", 4, 3), 3));
        assert!(!should_be_expelled(&student("c", 3, 5), 3));
        assert!(should_be_expelled(&student("d", 1, 5), 0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let students = generate_students(1_001, &mut fastrand::Rng::with_seed(1));
        for k in 0..=6 {
            let expected = filter_sequential(&students, k);
            for threads in [1, 2, 3, 4, 7, 16] {
                assert_eq!(filter_parallel(&students, k, threads).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_more_threads_than_students() {
        let students = vec![student("x", 6, 5), student("y", 1, 0), student("z", 5, 4)];
        let result = filter_parallel(&students, 2, 10).unwrap();
        assert_eq!(result, ["x", "z"]);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(filter_parallel(&[], 3, 4).unwrap().is_empty());
        assert!(filter_sequential(&[], 3).is_empty());
    }

    #[test]
    fn test_compare_filters() {
        let students = generate_students(200, &mut fastrand::Rng::with_seed(5));
        let report = compare_filters(&students, 2, DEFAULT_FILTER_THREADS).unwrap();
        assert_eq!(report.sequential, report.parallel);
        assert_eq!(report.threads, 4);
    }

    #[test]
    fn test_format_sample() {
        let names: Vec<String> = (1..=12).map(|i| format!("Student_{}", i)).collect();
        let out = format_sample(&names, 10);
        assert_eq!(out.lines().count(), 11);
        assert!(out.ends_with("... and 2 more students\n"));

        let short = format_sample(&names[..2], 10);
        assert_eq!(short, "Student_1\nStudent_2\n");
    }
}
