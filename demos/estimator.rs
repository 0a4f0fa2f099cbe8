use hll_estimator::{Estimator, EstimatorTrait};
use wyhash::wyhash;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut estimators = [Estimator::exact(), Estimator::hyperloglog(12)?];
    for i in 0..10_000u64 {
        // every value is added twice, only distinct keys count
        let key = wyhash(&(i % 5_000).to_le_bytes(), 0);
        estimators.iter_mut().for_each(|e| e.add(key));
    }

    for e in &estimators {
        println!("{:?}", e);
    }

    if let Err(err) = Estimator::hyperloglog(21) {
        println!("rejected: {err}");
    }
    Ok(())
}
