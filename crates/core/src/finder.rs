use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Two indices into the input sequence whose values sum to the target.
///
/// `first` is the index where the complement was first seen, `second` is the
/// scan position that completed the pair, so `first < second` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
}

impl Pair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// Single-pass complement lookup over a sequence of integers.
///
/// The finder keeps the earliest index of every value it has scanned. For each
/// new value it looks up `target - value` before recording the value, so the
/// first pair reported is the one with the smallest second index.
#[derive(Debug, Default)]
pub struct PairFinder {
    seen: HashMap<i64, usize>,
}

impl PairFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashMap::with_capacity(capacity),
        }
    }

    /// Scan `nums` and return the first pair summing to `target`.
    pub fn find(mut self, nums: &[i64], target: i64) -> Option<Pair> {
        for (index, &value) in nums.iter().enumerate() {
            if let Some(pair) = self.step(index, value, target) {
                debug!("Found pair ({}, {}) for target {}", pair.first, pair.second, target);
                return Some(pair);
            }
        }

        debug!("No pair in {} values sums to {}", nums.len(), target);
        None
    }

    fn step(&mut self, index: usize, value: i64, target: i64) -> Option<Pair> {
        // An overflowing complement is outside i64, so nothing seen can match it.
        if let Some(need) = target.checked_sub(value) {
            if let Some(&earlier) = self.seen.get(&need) {
                return Some(Pair::new(earlier, index));
            }
        } else {
            trace!("Complement of {} overflows for target {}", value, target);
        }

        self.seen.entry(value).or_insert(index);
        None
    }
}

/// Convenience wrapper over [`PairFinder::find`].
pub fn find_pair(nums: &[i64], target: i64) -> Option<Pair> {
    PairFinder::with_capacity(nums.len()).find(nums, target)
}
