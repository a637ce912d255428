//! Reusable cyclic barrier

use parking_lot::{Condvar, Mutex};

struct BarrierState {
    /// Participants still expected in the current phase
    waiting: usize,
    /// Completed phases; bumped only by the last arrival
    epoch: u64,
}

/// Cyclic barrier for a fixed number of participants
///
/// Every phase needs exactly `participants` calls to [`wait`](Self::wait).
/// The last arrival resets the count, advances the epoch and wakes all
/// others. Calling with a different number of participants per phase is a
/// caller error and may hang forever. Release order within a phase is
/// unspecified.
pub struct CyclicBarrier {
    state: Mutex<BarrierState>,
    phase_done: Condvar,
    participants: usize,
}

/// Outcome of [`CyclicBarrier::wait`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierWaitResult {
    leader: bool,
    epoch: u64,
}

impl BarrierWaitResult {
    /// True for exactly one participant per phase: the last to arrive
    pub fn is_leader(&self) -> bool {
        self.leader
    }

    /// Epoch the caller was released into (phases completed so far)
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl CyclicBarrier {
    /// Create a barrier for `participants` workers
    ///
    /// A zero participant count is treated as one.
    pub fn new(participants: usize) -> Self {
        let participants = participants.max(1);
        Self {
            state: Mutex::new(BarrierState {
                waiting: participants,
                epoch: 0,
            }),
            phase_done: Condvar::new(),
            participants,
        }
    }

    /// Block until all participants have reached the barrier in this phase
    pub fn wait(&self) -> BarrierWaitResult {
        let mut state = self.state.lock();
        let arrived_in = state.epoch;

        state.waiting -= 1;
        if state.waiting == 0 {
            state.waiting = self.participants;
            state.epoch += 1;
            let epoch = state.epoch;
            drop(state);
            self.phase_done.notify_all();
            return BarrierWaitResult {
                leader: true,
                epoch,
            };
        }

        // Spurious wake-ups leave the epoch untouched.
        while state.epoch == arrived_in {
            self.phase_done.wait(&mut state);
        }
        BarrierWaitResult {
            leader: false,
            epoch: arrived_in + 1,
        }
    }
}
