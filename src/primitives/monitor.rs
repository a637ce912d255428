//! Monitor: run closures under a lock with guaranteed release

use super::{BlockingMutex, RawLock};

/// Mutex-guarded critical-section executor
///
/// Unlike the raw locks, callers never pair `lock`/`unlock` themselves: the
/// lock is held exactly for the duration of [`execute`](Self::execute) and is
/// released even if the closure returns an error or panics.
#[derive(Default)]
pub struct Monitor {
    lock: BlockingMutex,
}

impl Monitor {
    pub const fn new() -> Self {
        Self {
            lock: BlockingMutex::new(),
        }
    }

    /// Run `critical_section` while holding the monitor's lock
    ///
    /// Whatever the closure returns (including an `Err`) is handed back to the
    /// caller after the lock has been released.
    #[inline]
    pub fn execute<R, F>(&self, critical_section: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = self.lock.guard();
        critical_section()
    }

    /// Whether a critical section is running right now (diagnostics only)
    pub fn is_busy(&self) -> bool {
        self.lock.is_locked()
    }
}
