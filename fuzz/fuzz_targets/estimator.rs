#![no_main]

use hll_estimator::{EstimatorTrait, ExactEstimator, HyperLogLog};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&width, data)) = data.split_first() else {
        return;
    };

    let width = HyperLogLog::MIN_REGISTER_WIDTH + usize::from(width) % 13;
    let mut hll = HyperLogLog::new(width).unwrap();
    let mut exact = ExactEstimator::new();
    assert_eq!(hll.count(), 0);

    for chunk in data.chunks(8) {
        let mut bytes = [0u8; 8];
        bytes[..chunk.len()].copy_from_slice(chunk);
        let key = u64::from_le_bytes(bytes);

        let before = hll.registers().to_vec();
        hll.add(key);
        exact.add(key);

        assert!(hll.registers().iter().zip(&before).all(|(r, b)| r >= b));
        assert!(hll.registers().iter().all(|&r| usize::from(r) <= 65 - width));
        assert!(hll.count() > 0);
        assert_eq!(hll.count(), hll.count());
    }

    assert!(exact.count() <= data.chunks(8).len() as u64);
    // a single occupied register always counts as exactly one key
    if exact.count() <= 1 {
        assert_eq!(hll.count(), exact.count());
    }
});
