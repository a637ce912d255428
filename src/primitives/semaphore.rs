//! Counting semaphore built from a mutex and a condition variable

use parking_lot::{Condvar, Mutex};

/// Counting semaphore
///
/// `wait` takes a permit, blocking while none is available; `signal` returns
/// one and wakes a single blocked waiter. Wake-up order is not FIFO: any
/// blocked waiter may win the permit, including a thread that was never
/// asleep.
pub struct CountingSemaphore {
    count: Mutex<usize>,
    available: Condvar,
}

impl CountingSemaphore {
    /// Create a semaphore holding `initial` permits
    pub const fn new(initial: usize) -> Self {
        Self {
            count: parking_lot::const_mutex(initial),
            available: Condvar::new(),
        }
    }

    /// Take one permit, blocking until one is available
    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count == 0 {
            self.available.wait(&mut count);
        }
        *count -= 1;
    }

    /// Return one permit and wake one waiter, if any
    pub fn signal(&self) {
        let mut count = self.count.lock();
        *count += 1;
        drop(count);
        self.available.notify_one();
    }

    /// Permits currently available (racy snapshot, diagnostics only)
    pub fn available(&self) -> usize {
        *self.count.lock()
    }
}

impl Default for CountingSemaphore {
    /// Binary semaphore: one permit
    fn default() -> Self {
        Self::new(1)
    }
}
