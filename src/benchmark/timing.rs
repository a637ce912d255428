//! Wall-clock timing harness

use std::time::Instant;

/// Run `f` and return its result with the elapsed wall-clock microseconds
///
/// Uses the monotonic clock, so the elapsed time is never negative.
#[inline]
pub fn timed<R, F>(f: F) -> (R, u64)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_micros() as u64;
    (result, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_returns_result() {
        let (value, _elapsed) = timed(|| "done");
        assert_eq!(value, "done");
    }

    #[test]
    fn test_measures_sleep() {
        let ((), elapsed) = timed(|| thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= 5_000, "elapsed {}us", elapsed);
    }
}
