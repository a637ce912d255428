//! Even, contiguous split of an operation count across workers

use std::ops::Range;

/// Half-open range `[start, end)` of operation indices owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRange {
    pub start: u64,
    pub end: u64,
}

impl WorkRange {
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Operation indices covered by this range
    pub fn iter(&self) -> Range<u64> {
        self.start..self.end
    }

    /// Same range as `usize` indices, for slicing
    pub fn as_index_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Range of `total` operations owned by worker `worker_index` of `worker_count`
///
/// Each worker gets `total / worker_count` operations and the first
/// `total % worker_count` workers get one extra, so sizes differ by at most
/// one and the ranges tile `[0, total)` in worker order. When
/// `total < worker_count` the trailing workers get empty ranges.
///
/// `worker_count` must be non-zero and `worker_index < worker_count`.
pub fn partition(worker_index: usize, worker_count: usize, total: u64) -> WorkRange {
    debug_assert!(worker_count > 0, "partition needs at least one worker");
    debug_assert!(worker_index < worker_count, "worker index out of range");

    let index = worker_index as u64;
    let count = worker_count as u64;
    let chunk = total / count;
    let remainder = total % count;

    let start = index * chunk + index.min(remainder);
    let end = start + chunk + u64::from(index < remainder);
    WorkRange { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_ranges(worker_count: usize, total: u64) -> Vec<WorkRange> {
        (0..worker_count)
            .map(|i| partition(i, worker_count, total))
            .collect()
    }

    fn assert_tiles(worker_count: usize, total: u64) {
        let ranges = all_ranges(worker_count, total);
        let mut cursor = 0;
        for r in &ranges {
            assert_eq!(r.start, cursor, "gap or overlap at {:?}", r);
            assert!(r.start <= r.end);
            cursor = r.end;
        }
        assert_eq!(cursor, total);

        let min = ranges.iter().map(|r| r.len()).min().unwrap();
        let max = ranges.iter().map(|r| r.len()).max().unwrap();
        assert!(max - min <= 1, "uneven split {}..{}", min, max);
    }

    #[test]
    fn test_tiles_small_grid() {
        for worker_count in 1..=12 {
            for total in 0..=50 {
                assert_tiles(worker_count, total);
            }
        }
    }

    #[test]
    fn test_six_workers_one_million() {
        let lens: Vec<u64> = all_ranges(6, 1_000_000).iter().map(|r| r.len()).collect();
        assert_eq!(lens, [166_667, 166_667, 166_667, 166_667, 166_666, 166_666]);
        assert_eq!(lens.iter().sum::<u64>(), 1_000_000);
        assert_eq!(partition(4, 6, 1_000_000).start, 4 * 166_667);
    }

    #[test]
    fn test_fewer_operations_than_workers() {
        let ranges = all_ranges(6, 4);
        assert_eq!(ranges.iter().filter(|r| r.is_empty()).count(), 2);
        assert!(ranges[4].is_empty() && ranges[5].is_empty());
        assert_eq!(ranges[3], WorkRange { start: 3, end: 4 });
    }

    #[test]
    fn test_zero_total() {
        for r in all_ranges(3, 0) {
            assert!(r.is_empty());
            assert_eq!(r.iter().count(), 0);
        }
    }

    #[test]
    fn test_single_worker_owns_everything() {
        let r = partition(0, 1, 99);
        assert_eq!(r, WorkRange { start: 0, end: 99 });
        assert_eq!(r.as_index_range(), 0..99);
    }
}
