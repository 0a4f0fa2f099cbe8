//! `hll-estimator` estimates the number of distinct elements in a multiset of pre-hashed 64-bit keys.
//!
//! It provides a constant memory HyperLogLog estimator with linear counting for small cardinalities,
//! and an exact estimator to validate it against. Keys must already be well-distributed hashes:
//! estimators never hash their input.
pub mod bits;
pub mod estimator;
pub mod exact;
pub mod hyperloglog;

pub use estimator::{Estimator, EstimatorError, EstimatorTrait};
pub use exact::ExactEstimator;
pub use hyperloglog::HyperLogLog;
