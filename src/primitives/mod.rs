//! Hand-built synchronization primitives
//!
//! Six constructs measured by the benchmark suite:
//! - BlockingMutex: thin wrapper over a native blocking lock
//! - CountingSemaphore: mutex + condvar permit counter
//! - CyclicBarrier: reusable epoch-based phase barrier
//! - SpinLock: test-and-set busy loop
//! - YieldingSpinLock: test-and-set loop that yields between attempts
//! - Monitor: executes closures under a lock with guaranteed release
//!
//! The three exclusive locks share the [`RawLock`] contract so the benchmark
//! runner and the [`LockGuard`] combinator can drive them uniformly.

pub mod barrier;
pub mod kind;
pub mod monitor;
pub mod mutex;
pub mod semaphore;
pub mod spinlock;

pub use barrier::{BarrierWaitResult, CyclicBarrier};
pub use kind::PrimitiveKind;
pub use monitor::Monitor;
pub use mutex::BlockingMutex;
pub use semaphore::CountingSemaphore;
pub use spinlock::{SpinLock, YieldingSpinLock};

/// Exclusive lock with explicit acquire and release
///
/// Implementors guarantee that between a returned `lock()` and the matching
/// `unlock()` no other caller returns from `lock()`.
pub trait RawLock: Sync {
    /// Block (or spin) until exclusive ownership is granted.
    fn lock(&self);

    /// Release ownership.
    ///
    /// # Safety
    ///
    /// The caller must currently own the lock. Releasing a lock held by
    /// another worker, or one that is not held at all, is a programming
    /// error that breaks mutual exclusion for every other user.
    unsafe fn unlock(&self);

    /// Acquire the lock and release it when the returned guard drops.
    #[inline]
    fn guard(&self) -> LockGuard<'_, Self>
    where
        Self: Sized,
    {
        self.lock();
        LockGuard { lock: self }
    }
}

/// Scoped ownership of a [`RawLock`]
///
/// Releases on drop, which includes unwinding out of a panicking critical
/// section.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard<'a, L: RawLock> {
    lock: &'a L,
}

impl<L: RawLock> Drop for LockGuard<'_, L> {
    #[inline]
    fn drop(&mut self) {
        // SAFETY: a guard only exists while its creator holds the lock.
        unsafe { self.lock.unlock() }
    }
}
