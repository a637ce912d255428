//! Spin locks
//!
//! Both locks are a single `AtomicBool` taken with an Acquire swap and
//! released with a Release store. They differ only in what a waiter does
//! after a failed attempt.

use std::hint;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use super::RawLock;

/// Test-and-set spin lock
///
/// Waiters busy-loop on the flag and never give up the processor. Only
/// suitable for very short critical sections. No fairness: a waiter can
/// starve under contention.
pub struct SpinLock {
    locked: AtomicBool,
}

impl SpinLock {
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn lock(&self) {
        while self.locked.swap(true, Ordering::Acquire) {
            hint::spin_loop();
        }
    }

    /// # Safety
    ///
    /// Must only be called by the current owner.
    #[inline]
    pub unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

impl Default for SpinLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for SpinLock {
    #[inline]
    fn lock(&self) {
        SpinLock::lock(self);
    }

    #[inline]
    unsafe fn unlock(&self) {
        SpinLock::unlock(self);
    }
}

/// Spin lock that yields to the scheduler after every failed attempt
///
/// Trades acquisition latency for less wasted CPU when the holder is slow or
/// descheduled.
pub struct YieldingSpinLock {
    locked: AtomicBool,
}

impl YieldingSpinLock {
    pub const fn new() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }

    #[inline]
    pub fn lock(&self) {
        while self.locked.swap(true, Ordering::Acquire) {
            thread::yield_now();
        }
    }

    /// # Safety
    ///
    /// Must only be called by the current owner.
    #[inline]
    pub unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

impl Default for YieldingSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for YieldingSpinLock {
    #[inline]
    fn lock(&self) {
        YieldingSpinLock::lock(self);
    }

    #[inline]
    unsafe fn unlock(&self) {
        YieldingSpinLock::unlock(self);
    }
}
