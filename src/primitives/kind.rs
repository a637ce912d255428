//! Primitive identifiers used by the CLI, runner and reports

use std::fmt;

/// One of the six benchmarked primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Mutex,
    Semaphore,
    Barrier,
    SpinLock,
    SpinWait,
    Monitor,
}

impl PrimitiveKind {
    /// Canonical benchmark order
    pub const ALL: [PrimitiveKind; 6] = [
        PrimitiveKind::Mutex,
        PrimitiveKind::Semaphore,
        PrimitiveKind::Barrier,
        PrimitiveKind::SpinLock,
        PrimitiveKind::SpinWait,
        PrimitiveKind::Monitor,
    ];

    /// Display name used in result tables
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Mutex => "Mutex",
            PrimitiveKind::Semaphore => "Semaphore",
            PrimitiveKind::Barrier => "Barrier",
            PrimitiveKind::SpinLock => "SpinLock",
            PrimitiveKind::SpinWait => "SpinWait",
            PrimitiveKind::Monitor => "Monitor",
        }
    }

    /// Parse a primitive name (case-insensitive, accepts a few aliases)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mutex" => Some(PrimitiveKind::Mutex),
            "semaphore" | "sem" => Some(PrimitiveKind::Semaphore),
            "barrier" => Some(PrimitiveKind::Barrier),
            "spinlock" | "spin-lock" | "spin" => Some(PrimitiveKind::SpinLock),
            "spinwait" | "spin-wait" | "yielding-spinlock" => Some(PrimitiveKind::SpinWait),
            "monitor" => Some(PrimitiveKind::Monitor),
            _ => None,
        }
    }

    /// Whether workers split the operation count into ranges
    ///
    /// The barrier instead runs every phase on every worker.
    pub fn is_partitioned(&self) -> bool {
        !matches!(self, PrimitiveKind::Barrier)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
