//! Dining philosophers with a seat limit
//!
//! Deadlock is avoided twice over: a counting semaphore admits at most
//! `seats` philosophers (one fewer than the number of forks), and every
//! philosopher takes the lower-numbered fork first. All shared state lives in
//! one [`DiningTable`] built per run and borrowed by every philosopher thread.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::primitives::{BlockingMutex, CountingSemaphore, Monitor, RawLock};
use crate::utils::{BenchError, Result};

pub const DEFAULT_PHILOSOPHERS: usize = 5;
pub const DEFAULT_SEATS: usize = 4;

/// Parameters of one dinner
#[derive(Debug, Clone)]
pub struct DiningConfig {
    pub philosophers: usize,
    pub seats: usize,
    /// Think/eat cycles per philosopher
    pub cycles: u32,
    /// Think time range in milliseconds
    pub think_ms: RangeInclusive<u64>,
    /// Eat time range in milliseconds
    pub eat_ms: RangeInclusive<u64>,
    /// Print a line for every state transition
    pub announce: bool,
}

impl Default for DiningConfig {
    fn default() -> Self {
        Self {
            philosophers: DEFAULT_PHILOSOPHERS,
            seats: DEFAULT_SEATS,
            cycles: 5,
            think_ms: 500..=1500,
            eat_ms: 100..=300,
            announce: true,
        }
    }
}

impl DiningConfig {
    pub fn validate(&self) -> Result<()> {
        if self.philosophers < 2 {
            return Err(BenchError::Config(
                "at least two philosophers are needed to share forks".to_string(),
            ));
        }
        if self.seats == 0 {
            return Err(BenchError::Config("at least one seat is needed".to_string()));
        }
        if self.think_ms.is_empty() || self.eat_ms.is_empty() {
            return Err(BenchError::Config("empty think or eat range".to_string()));
        }
        Ok(())
    }
}

/// What the instrumentation saw during one dinner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiningReport {
    /// Meals eaten in total
    pub meals: u64,
    /// Most philosophers eating at the same instant
    pub max_concurrent_eaters: usize,
    /// Times a philosopher started eating while a neighbour was eating
    pub adjacent_conflicts: u64,
}

#[derive(Debug, Default)]
struct EatingState {
    eating: Vec<bool>,
    current: usize,
    peak: usize,
    adjacent_conflicts: u64,
}

/// Forks, seats and console shared by one dinner's philosophers
pub struct DiningTable {
    forks: Vec<BlockingMutex>,
    seats: CountingSemaphore,
    console: Monitor,
    state: Mutex<EatingState>,
    meals: AtomicU64,
    announce: bool,
}

impl DiningTable {
    pub fn new(philosophers: usize, seats: usize, announce: bool) -> Self {
        Self {
            forks: (0..philosophers).map(|_| BlockingMutex::new()).collect(),
            seats: CountingSemaphore::new(seats),
            console: Monitor::new(),
            state: Mutex::new(EatingState {
                eating: vec![false; philosophers],
                ..EatingState::default()
            }),
            meals: AtomicU64::new(0),
            announce,
        }
    }

    pub fn philosophers(&self) -> usize {
        self.forks.len()
    }

    /// Fork indices for philosopher `id`, lower index first
    pub fn fork_order(&self, id: usize) -> (usize, usize) {
        let left = id;
        let right = (id + 1) % self.philosophers();
        if left < right {
            (left, right)
        } else {
            (right, left)
        }
    }

    fn announce(&self, id: usize, action: &str, cycle: u32) {
        if self.announce {
            self.console
                .execute(|| println!("Philosopher {} {} (round {})", id, action, cycle));
        }
    }

    fn start_eating(&self, id: usize) {
        let n = self.philosophers();
        let mut state = self.state.lock();
        let left = (id + n - 1) % n;
        let right = (id + 1) % n;
        if state.eating[left] || state.eating[right] {
            state.adjacent_conflicts += 1;
        }
        state.eating[id] = true;
        state.current += 1;
        state.peak = state.peak.max(state.current);
    }

    fn stop_eating(&self, id: usize) {
        let mut state = self.state.lock();
        state.eating[id] = false;
        state.current -= 1;
        drop(state);
        self.meals.fetch_add(1, Ordering::Relaxed);
    }

    /// One philosopher's whole dinner
    fn dine(&self, id: usize, config: &DiningConfig) {
        let mut rng = fastrand::Rng::new();
        let (first, second) = self.fork_order(id);

        for cycle in 1..=config.cycles {
            self.announce(id, "is thinking", cycle);
            thread::sleep(Duration::from_millis(rng.u64(config.think_ms.clone())));

            self.seats.wait();
            let first_fork = self.forks[first].guard();
            let second_fork = self.forks[second].guard();

            self.start_eating(id);
            self.announce(id, "is eating", cycle);
            thread::sleep(Duration::from_millis(rng.u64(config.eat_ms.clone())));
            self.stop_eating(id);

            drop(first_fork);
            drop(second_fork);
            self.seats.signal();
        }
        debug!("philosopher {} finished {} cycles", id, config.cycles);
    }

    pub fn report(&self) -> DiningReport {
        let state = self.state.lock();
        DiningReport {
            meals: self.meals.load(Ordering::Relaxed),
            max_concurrent_eaters: state.peak,
            adjacent_conflicts: state.adjacent_conflicts,
        }
    }
}

/// Seat everyone, let them dine, and report what happened
pub fn run_dinner(config: &DiningConfig) -> Result<DiningReport> {
    config.validate()?;
    let table = DiningTable::new(config.philosophers, config.seats, config.announce);

    thread::scope(|s| -> Result<()> {
        let handles = (0..config.philosophers)
            .map(|id| {
                let table = &table;
                thread::Builder::new()
                    .name(format!("philosopher-{}", id))
                    .spawn_scoped(s, move || table.dine(id, config))
            })
            .collect::<std::io::Result<Vec<_>>>()?;

        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
        for (id, outcome) in outcomes.into_iter().enumerate() {
            if outcome.is_err() {
                return Err(BenchError::Worker(format!("philosopher-{} panicked", id)));
            }
        }
        Ok(())
    })?;

    Ok(table.report())
}
