//! Estimator contract shared by the exact and the HyperLogLog estimators.
//!
//! Both estimators consume keys which are already hashed into well-distributed `u64`
//! values; hashing is the caller's responsibility. [`Estimator`] wraps either variant so
//! callers can drive them interchangeably, e.g. to compare an estimate against the exact
//! ground truth over the same input.

use enum_dispatch::enum_dispatch;

use crate::exact::ExactEstimator;
use crate::hyperloglog::HyperLogLog;

/// Operations implemented by every estimator.
#[enum_dispatch(Estimator)]
pub trait EstimatorTrait {
    /// Add a pre-hashed key to the estimator
    fn add(&mut self, key: u64);
    /// Return the cardinality of distinct keys added so far
    fn count(&self) -> u64;
    /// Return memory footprint in bytes
    fn size_of(&self) -> usize;
    fn to_string(&self) -> String {
        format!("count: {}, size: {}", self.count(), self.size_of())
    }
}

/// Estimator variants supported by this crate
#[derive(Clone, Debug, PartialEq)]
#[enum_dispatch]
pub enum Estimator {
    Exact(ExactEstimator),
    HyperLogLog(HyperLogLog),
}

impl Estimator {
    /// Creates new exact estimator
    pub fn exact() -> Self {
        Estimator::Exact(ExactEstimator::new())
    }

    /// Creates new HyperLogLog estimator with `2^register_width` registers
    pub fn hyperloglog(register_width: usize) -> Result<Self, EstimatorError> {
        HyperLogLog::new(register_width).map(Estimator::HyperLogLog)
    }
}

/// Estimator construction error
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EstimatorError {
    #[error("register width must be in [{min}..{max}], got {width}")]
    InvalidRegisterWidth {
        width: usize,
        min: usize,
        max: usize,
    },
    #[error("relative error {0} is not reachable with at most 2^20 registers")]
    InvalidTargetError(f64),
}
