use crate::error::{Result, StatsError};
use num::ToPrimitive;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic generator for reproducible sampling.
///
/// Two generators built from the same seed yield the same draws when they are
/// consumed by the same sequence of calls.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Checks that `p` is a probability, i.e. lies in $[0, 1]$.
pub(crate) fn check_probability(p: f64) -> Result<f64> {
    if !(0. ..=1.).contains(&p) {
        return Err(StatsError::domain(format!(
            "probability must lie in [0, 1], got {}",
            p
        )));
    }
    Ok(p)
}

pub(crate) fn as_f64<T: ToPrimitive>(x: &T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

pub(crate) fn to_f64_vec<T: ToPrimitive>(data: &[T]) -> Vec<f64> {
    data.iter().map(as_f64).collect()
}
