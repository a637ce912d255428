//! Benchmark runner
//!
//! Drives one primitive at a time through the same workload: `workers` OS
//! threads, each repeatedly acquiring the primitive, producing one
//! pseudo-random printable byte, and releasing it. The primitive instance is
//! created per run and shared by reference with scoped worker threads, so it
//! is dropped as soon as the run completes.

use std::hint::black_box;
use std::thread::{self, Scope, ScopedJoinHandle};

use parking_lot::{Condvar, Mutex};
use serde::Serialize;
use tracing::debug;

use super::partition::partition;
use super::timing::timed;
use crate::config::BenchConfig;
use crate::primitives::{
    BlockingMutex, CountingSemaphore, CyclicBarrier, Monitor, PrimitiveKind, RawLock, SpinLock,
    YieldingSpinLock,
};
use crate::utils::{BenchError, Result};

/// Outcome of one primitive run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// Primitive display name
    pub name: String,
    /// Wall-clock time from first spawn to last join
    pub elapsed_micros: u64,
    /// Worker threads used
    pub workers: usize,
    /// Critical sections (or barrier phases, summed over workers) executed
    pub critical_sections: u64,
}

impl BenchmarkResult {
    /// Critical sections per second
    pub fn throughput(&self) -> f64 {
        if self.elapsed_micros == 0 {
            return 0.0;
        }
        self.critical_sections as f64 * 1_000_000.0 / self.elapsed_micros as f64
    }
}

/// The trivial unit of work performed inside every critical section
#[inline]
fn random_byte(rng: &mut fastrand::Rng) -> u8 {
    rng.u8(32..=126)
}

/// Runs primitives under a fixed worker count and operation total
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    workers: usize,
    total_operations: u64,
    semaphore_permits: usize,
}

impl BenchmarkRunner {
    /// Runner with a binary semaphore
    pub fn new(workers: usize, total_operations: u64) -> Self {
        debug_assert!(workers > 0, "runner needs at least one worker");
        Self {
            workers,
            total_operations,
            semaphore_permits: 1,
        }
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.threads, config.operations).with_permits(config.permits)
    }

    /// Initial permit count for the semaphore benchmark
    pub fn with_permits(mut self, permits: usize) -> Self {
        self.semaphore_permits = permits;
        self
    }

    /// Benchmark one primitive
    ///
    /// A panicking worker fails the whole run; there is no partial result.
    pub fn run(&self, kind: PrimitiveKind) -> Result<BenchmarkResult> {
        let (critical_sections, elapsed_micros) = match kind {
            PrimitiveKind::Mutex => {
                let mutex = BlockingMutex::new();
                timed(|| self.run_raw_lock(&mutex))
            }
            PrimitiveKind::SpinLock => {
                let lock = SpinLock::new();
                timed(|| self.run_raw_lock(&lock))
            }
            PrimitiveKind::SpinWait => {
                let lock = YieldingSpinLock::new();
                timed(|| self.run_raw_lock(&lock))
            }
            PrimitiveKind::Semaphore => {
                let semaphore = CountingSemaphore::new(self.semaphore_permits);
                timed(|| {
                    self.run_ranges(|rng| {
                        semaphore.wait();
                        black_box(random_byte(rng));
                        semaphore.signal();
                    })
                })
            }
            PrimitiveKind::Monitor => {
                let monitor = Monitor::new();
                timed(|| {
                    self.run_ranges(|rng| {
                        monitor.execute(|| black_box(random_byte(rng)));
                    })
                })
            }
            PrimitiveKind::Barrier => {
                let barrier = CyclicBarrier::new(self.workers);
                timed(|| self.run_phases(&barrier))
            }
        };
        let critical_sections = critical_sections?;

        debug!(
            "{}: {} workers, {} critical sections in {}us",
            kind, self.workers, critical_sections, elapsed_micros
        );

        Ok(BenchmarkResult {
            name: kind.as_str().to_string(),
            elapsed_micros,
            workers: self.workers,
            critical_sections,
        })
    }

    fn run_raw_lock<L: RawLock>(&self, lock: &L) -> Result<u64> {
        self.run_ranges(|rng| {
            let _guard = lock.guard();
            black_box(random_byte(rng));
        })
    }

    /// Each worker executes `critical_section` once per operation in its range
    fn run_ranges<F>(&self, critical_section: F) -> Result<u64>
    where
        F: Fn(&mut fastrand::Rng) + Sync,
    {
        let workers = self.workers;
        let total = self.total_operations;
        let critical_section = &critical_section;

        thread::scope(|s| {
            let handles = spawn_workers(s, workers, move |worker_id| {
                let range = partition(worker_id, workers, total);
                let mut rng = fastrand::Rng::new();
                for _ in range.iter() {
                    critical_section(&mut rng);
                }
                range.len()
            })?;
            join_workers(handles)
        })
    }

    /// Every worker passes the barrier once per operation: the phase count
    /// is not split across workers.
    ///
    /// Workers hold at a start gate until the whole pool is spawned. If a
    /// spawn fails they are released with a stop signal and return without
    /// touching a barrier that can never fill.
    fn run_phases(&self, barrier: &CyclicBarrier) -> Result<u64> {
        let phases = self.total_operations;
        let gate = StartGate::new();
        let gate = &gate;

        thread::scope(|s| {
            let spawned = spawn_workers(s, self.workers, move |_worker_id| {
                if !gate.wait() {
                    return 0;
                }
                let mut rng = fastrand::Rng::new();
                for _ in 0..phases {
                    barrier.wait();
                    black_box(random_byte(&mut rng));
                }
                phases
            });
            gate.open(spawned.is_ok());
            join_workers(spawned?)
        })
    }
}

/// Convenience wrapper: benchmark `kind` with a binary semaphore
pub fn run(kind: PrimitiveKind, workers: usize, total_operations: u64) -> Result<BenchmarkResult> {
    BenchmarkRunner::new(workers, total_operations).run(kind)
}

/// One-shot release for a pool of workers
struct StartGate {
    go: Mutex<Option<bool>>,
    opened: Condvar,
}

impl StartGate {
    fn new() -> Self {
        Self {
            go: Mutex::new(None),
            opened: Condvar::new(),
        }
    }

    /// Release every waiter; `go` is what they see
    fn open(&self, go: bool) {
        *self.go.lock() = Some(go);
        self.opened.notify_all();
    }

    /// Block until opened; true means proceed
    fn wait(&self) -> bool {
        let mut state = self.go.lock();
        loop {
            if let Some(go) = *state {
                return go;
            }
            self.opened.wait(&mut state);
        }
    }
}

fn spawn_workers<'scope, 'env, F>(
    scope: &'scope Scope<'scope, 'env>,
    workers: usize,
    body: F,
) -> Result<Vec<ScopedJoinHandle<'scope, u64>>>
where
    F: Fn(usize) -> u64 + Send + Copy + 'scope,
{
    (0..workers)
        .map(|worker_id| {
            thread::Builder::new()
                .name(format!("bench-worker-{}", worker_id))
                .spawn_scoped(scope, move || body(worker_id))
                .map_err(BenchError::from)
        })
        .collect()
}

/// Join every worker before reporting, so a panic in one worker does not
/// leave others unjoined.
fn join_workers(handles: Vec<ScopedJoinHandle<'_, u64>>) -> Result<u64> {
    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join()).collect();

    let mut total = 0u64;
    for (worker_id, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(count) => total += count,
            Err(_) => {
                return Err(BenchError::Worker(format!(
                    "bench-worker-{} panicked",
                    worker_id
                )))
            }
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_byte_printable() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..10_000 {
            let b = random_byte(&mut rng);
            assert!((32..=126).contains(&b));
        }
    }

    #[test]
    fn test_mutex_single_thread_zero_operations() {
        let result = run(PrimitiveKind::Mutex, 1, 0).unwrap();
        assert_eq!(result.name, "Mutex");
        assert_eq!(result.workers, 1);
        assert_eq!(result.critical_sections, 0);
    }

    #[test]
    fn test_partitioned_kinds_execute_total_operations() {
        let runner = BenchmarkRunner::new(6, 1_003);
        for kind in PrimitiveKind::ALL.into_iter().filter(|k| k.is_partitioned()) {
            let result = runner.run(kind).unwrap();
            assert_eq!(result.name, kind.as_str());
            assert_eq!(result.critical_sections, 1_003, "{}", kind);
        }
    }

    #[test]
    fn test_barrier_runs_every_phase_on_every_worker() {
        let result = run(PrimitiveKind::Barrier, 4, 100).unwrap();
        assert_eq!(result.name, "Barrier");
        assert_eq!(result.critical_sections, 400);
    }

    #[test]
    fn test_more_workers_than_operations() {
        let result = run(PrimitiveKind::SpinLock, 8, 3).unwrap();
        assert_eq!(result.critical_sections, 3);
    }

    #[test]
    fn test_semaphore_with_several_permits() {
        let runner = BenchmarkRunner::new(4, 500).with_permits(3);
        let result = runner.run(PrimitiveKind::Semaphore).unwrap();
        assert_eq!(result.critical_sections, 500);
    }

    #[test]
    fn test_closed_gate_releases_workers_without_running() {
        let gate = StartGate::new();
        let barrier = CyclicBarrier::new(4);

        let ran = thread::scope(|s| {
            let handles: Vec<_> = (0..3)
                .map(|_| {
                    s.spawn(|| {
                        if !gate.wait() {
                            return 0u64;
                        }
                        // A 4-party barrier with 3 workers would never fill.
                        barrier.wait();
                        1
                    })
                })
                .collect();
            gate.open(false);
            handles.into_iter().map(|h| h.join().unwrap()).sum::<u64>()
        });
        assert_eq!(ran, 0);
    }

    #[test]
    fn test_open_gate_lets_workers_through() {
        let gate = StartGate::new();
        thread::scope(|s| {
            let waiter = s.spawn(|| gate.wait());
            gate.open(true);
            assert!(waiter.join().unwrap());
        });
        assert!(gate.wait());
    }

    #[test]
    fn test_worker_panic_is_reported() {
        let runner = BenchmarkRunner::new(3, 30);
        let err = runner
            .run_ranges(|rng| {
                if random_byte(rng) > 0 {
                    panic!("critical section failed");
                }
            })
            .unwrap_err();
        assert!(matches!(err, BenchError::Worker(_)));
    }

    #[test]
    fn test_throughput() {
        let result = BenchmarkResult {
            name: "Mutex".to_string(),
            elapsed_micros: 500_000,
            workers: 6,
            critical_sections: 1_000_000,
        };
        assert_eq!(result.throughput(), 2_000_000.0);

        let instant = BenchmarkResult {
            elapsed_micros: 0,
            ..result
        };
        assert_eq!(instant.throughput(), 0.0);
    }
}
