//! Bit-level helpers used by the HyperLogLog estimator.
//!
//! All functions here are pure and total over the inputs the estimator feeds them.

/// Return the number of leading zero bits in `w`, scanning from the most significant bit.
///
/// Returns 64 when `w` is zero.
#[inline]
pub fn leading_zeros(w: u64) -> u8 {
    // `u64::leading_zeros` is at most 64, so it always fits into a byte.
    w.leading_zeros() as u8
}

/// Split `word` into `(head, tail)` at the `n`-th most significant bit.
///
/// - `head` holds the top `n` bits of `word` shifted down, so it lies in `[0, 2^n)`.
/// - `tail` holds the remaining `64 - n` bits shifted up to the top of the word;
///   its low `n` bits are always zero.
///
/// `n` must be in `[1, 63]`.
#[inline]
pub fn split_word(word: u64, n: usize) -> (u64, u64) {
    debug_assert!((1..64).contains(&n), "split position {n} out of [1..63]");
    (word >> (64 - n), word << n)
}

/// Harmonic mean of register ranks: `1 / Σ 2^(-v)`.
///
/// An empty slice has an empty sum and yields `f64::INFINITY`.
#[inline]
pub fn harmonic_mean(values: &[u8]) -> f64 {
    // folded from +0.0: an empty `Iterator::sum` of f64 is -0.0
    let sum = values
        .iter()
        .fold(0.0, |acc, &v| acc + (-f64::from(v)).exp2());
    1.0 / sum
}

/// Bias correction constant for `m` registers.
///
/// Only valid for `m >= 128`.
#[inline]
pub fn alpha(m: usize) -> f64 {
    0.7213 / (1.0 + 1.079 / (m as f64))
}
