//! Blocking mutex over a native lock

use parking_lot::lock_api::RawMutex as _;

use super::RawLock;

/// Blocking mutual-exclusion lock with explicit `lock`/`unlock`
///
/// Waiters are parked by the OS instead of spinning. Not re-entrant: locking
/// twice from the same thread deadlocks. There is no timeout and no
/// try-variant.
pub struct BlockingMutex {
    raw: parking_lot::RawMutex,
}

impl BlockingMutex {
    pub const fn new() -> Self {
        Self {
            raw: parking_lot::RawMutex::INIT,
        }
    }

    /// Block until exclusive ownership is granted
    #[inline]
    pub fn lock(&self) {
        self.raw.lock();
    }

    /// Release ownership
    ///
    /// # Safety
    ///
    /// Must only be called by the current owner. Unlocking from any other
    /// thread, or unlocking an unlocked mutex, is a programming error.
    #[inline]
    pub unsafe fn unlock(&self) {
        self.raw.unlock();
    }

    /// Whether some worker currently owns the lock (diagnostics only)
    pub fn is_locked(&self) -> bool {
        self.raw.is_locked()
    }
}

impl Default for BlockingMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for BlockingMutex {
    #[inline]
    fn lock(&self) {
        BlockingMutex::lock(self);
    }

    #[inline]
    unsafe fn unlock(&self) {
        BlockingMutex::unlock(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::test_support::hammer;

    #[test]
    fn test_lock_unlock() {
        let m = BlockingMutex::new();
        assert!(!m.is_locked());
        m.lock();
        assert!(m.is_locked());
        unsafe { m.unlock() };
        assert!(!m.is_locked());
    }

    #[test]
    fn test_guard_releases() {
        let m = BlockingMutex::new();
        {
            let _g = m.guard();
            assert!(m.is_locked());
        }
        assert!(!m.is_locked());
    }

    #[test]
    fn test_no_lost_updates() {
        for _ in 0..100 {
            let m = BlockingMutex::new();
            assert_eq!(hammer(&m, 4, 250), 1000);
        }
    }
}
