//! ## HyperLogLog estimator
//! Estimates cardinality of pre-hashed keys using `M = 2^W` byte registers, where `W` is
//! the register width in [8..20] range.
//!
//! [Original HyperLogLog paper](https://algo.inria.fr/flajolet/Publications/FlFuGaMe07.pdf)
//!
//! Key layout, for `W = 8`:
//! - 63..56 bits   - register index
//! - 55..0 bits    - remainder, rank is its number of leading zeros plus one
//!
//! Registers are stored as `u8`, the largest possible rank being `64 - W + 1 = 57`.
//!
//! Expected error (relative standard error `1.04 / sqrt(M)`):
//! - W = 8: 6.50%
//! - W = 10: 3.25%
//! - W = 14: 0.81%
//! - W = 20: 0.10%

use std::fmt::{Debug, Formatter};
use std::mem::{size_of, size_of_val};

use log::{debug, trace};

use crate::bits::{alpha, harmonic_mean, leading_zeros, split_word};
use crate::estimator::{EstimatorError, EstimatorTrait};

/// HyperLogLog estimator
///
/// Registers are updated with a non-atomic read-max-write, so sharing an instance
/// between writers requires external synchronization (e.g. a `Mutex`).
#[derive(Clone, PartialEq)]
pub struct HyperLogLog {
    /// Number of key bits used as register index
    width: usize,
    /// Maximum rank observed per register
    registers: Box<[u8]>,
}

impl HyperLogLog {
    /// Smallest register width; `alpha` is only valid for at least 128 registers
    pub const MIN_REGISTER_WIDTH: usize = 8;
    /// Largest register width, i.e. 1 MiB of registers
    pub const MAX_REGISTER_WIDTH: usize = 20;

    /// Creates new `HyperLogLog` with `2^register_width` zeroed registers.
    ///
    /// Returns an error if `register_width` is outside of [8..20] range.
    pub fn new(register_width: usize) -> Result<Self, EstimatorError> {
        if !(Self::MIN_REGISTER_WIDTH..=Self::MAX_REGISTER_WIDTH).contains(&register_width) {
            return Err(EstimatorError::InvalidRegisterWidth {
                width: register_width,
                min: Self::MIN_REGISTER_WIDTH,
                max: Self::MAX_REGISTER_WIDTH,
            });
        }

        let m = 1 << register_width;
        let hll = Self {
            width: register_width,
            registers: vec![0u8; m].into_boxed_slice(),
        };
        debug!(
            "created hyperloglog: width = {register_width}, registers = {m}, bytes = {}",
            hll.size_of()
        );

        Ok(hll)
    }

    /// Creates new `HyperLogLog` with the smallest register width whose
    /// relative standard error does not exceed `target`.
    pub fn with_error(target: f64) -> Result<Self, EstimatorError> {
        (Self::MIN_REGISTER_WIDTH..=Self::MAX_REGISTER_WIDTH)
            .find(|&w| relative_error(1 << w) <= target)
            .ok_or(EstimatorError::InvalidTargetError(target))
            .and_then(Self::new)
    }

    /// Return number of key bits used as register index
    #[inline]
    pub fn register_width(&self) -> usize {
        self.width
    }

    /// Return number of registers
    #[inline]
    pub fn register_count(&self) -> usize {
        self.registers.len()
    }

    #[inline]
    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Return expected relative standard error of the estimate
    #[inline]
    pub fn relative_error(&self) -> f64 {
        relative_error(self.registers.len())
    }

    /// Return number of registers which were never updated
    #[inline]
    pub fn zero_registers(&self) -> usize {
        self.registers.iter().filter(|&&r| r == 0).count()
    }

    /// Return raw HyperLogLog estimate without small range correction
    #[inline]
    pub fn raw_estimate(&self) -> f64 {
        let m = self.registers.len() as f64;
        alpha(self.registers.len()) * m * m * harmonic_mean(&self.registers)
    }

    /// Return linear counting estimate based on the share of zero registers.
    ///
    /// Returns `None` when all registers are populated.
    #[inline]
    pub fn linear_count(&self) -> Option<u64> {
        match self.zero_registers() {
            0 => None,
            zeros => {
                let m = self.registers.len() as f64;
                Some((m * (m / zeros as f64).ln()).floor() as u64)
            }
        }
    }
}

impl EstimatorTrait for HyperLogLog {
    /// Insert key into `HyperLogLog`
    #[inline]
    fn add(&mut self, key: u64) {
        let (idx, remainder) = split_word(key, self.width);

        // Low `width` bits of the remainder are always zero, so an all-zero remainder
        // is capped at the number of meaningful bits.
        let rank = if remainder == 0 {
            (64 - self.width + 1) as u8
        } else {
            leading_zeros(remainder) + 1
        };

        // `idx` is below `2^width` which is the registers length.
        let register = &mut self.registers[idx as usize];
        if rank > *register {
            *register = rank;
        }
    }

    /// Return cardinality estimate of `HyperLogLog`
    #[inline]
    fn count(&self) -> u64 {
        let m = self.registers.len() as f64;
        let estimate = self.raw_estimate();

        if estimate < 2.5 * m {
            if let Some(count) = self.linear_count() {
                trace!("small range correction: raw = {estimate:.2}, linear = {count}");
                return count;
            }
        }

        estimate.floor() as u64
    }

    /// Return memory size of `HyperLogLog`
    #[inline]
    fn size_of(&self) -> usize {
        size_of::<Self>() + size_of_val(&*self.registers)
    }
}

impl Debug for HyperLogLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "width: {}, {}", self.width, self.to_string())
    }
}

#[inline]
fn relative_error(m: usize) -> f64 {
    1.04 / (m as f64).sqrt()
}
