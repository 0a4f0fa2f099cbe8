//! ## Exact estimator
//! Counts distinct keys exactly by remembering every key seen so far.
//! Memory grows linearly with cardinality; use it as ground truth when evaluating
//! [`HyperLogLog`](crate::hyperloglog::HyperLogLog) accuracy.

use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::mem::size_of;

use crate::estimator::EstimatorTrait;

/// Exact estimator container
///
/// Requires external synchronization (e.g. a `Mutex`) when shared between writers.
#[derive(Clone, Default, PartialEq)]
pub struct ExactEstimator {
    keys: HashSet<u64>,
}

impl ExactEstimator {
    /// Creates new empty `ExactEstimator`
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EstimatorTrait for ExactEstimator {
    /// Insert key into the set; re-adding a known key is a no-op
    #[inline]
    fn add(&mut self, key: u64) {
        self.keys.insert(key);
    }

    /// Return exact number of distinct keys
    #[inline]
    fn count(&self) -> u64 {
        self.keys.len() as u64
    }

    /// Return memory size of `ExactEstimator`: the set header plus one key
    /// and one control byte per allocated slot.
    #[inline]
    fn size_of(&self) -> usize {
        size_of::<Self>() + self.keys.capacity() * (size_of::<u64>() + 1)
    }
}

impl Debug for ExactEstimator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string())
    }
}
