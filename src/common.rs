//! Descriptive statistics over sample sequences
//!
//! Every function here is generic over the primitive numeric types through
//! [`num::ToPrimitive`], so integer and floating point samples share one
//! implementation. Inputs are never mutated.
use crate::error::{require_len, Result, StatsError};
use crate::util::{as_f64, to_f64_vec};
use ndarray::Array1;
use num::ToPrimitive;
use statrs::function::gamma::{gamma, ln_gamma};

/// Arithmetic mean of `data`.
pub fn mean<T: ToPrimitive>(data: &[T]) -> Result<f64> {
    require_len(data.len(), 1)?;
    let total: f64 = data.iter().map(as_f64).sum();
    Ok(total / data.len() as f64)
}

fn sum_sq_dev<T: ToPrimitive>(data: &[T]) -> Result<f64> {
    let m = mean(data)?;
    Ok(data.iter().map(|x| (as_f64(x) - m).powi(2)).sum())
}

/// Unbiased sample variance (divisor $n - 1$); needs at least two points.
pub fn variance<T: ToPrimitive>(data: &[T]) -> Result<f64> {
    require_len(data.len(), 2)?;
    Ok(sum_sq_dev(data)? / (data.len() - 1) as f64)
}

/// Population variance (divisor $n$).
pub fn pvariance<T: ToPrimitive>(data: &[T]) -> Result<f64> {
    require_len(data.len(), 1)?;
    Ok(sum_sq_dev(data)? / data.len() as f64)
}

/// Unbiased sample standard deviation, the square root of [`variance`].
pub fn sd<T: ToPrimitive>(data: &[T]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

/// Median of `data`. Even-length samples average the two central values.
pub fn median<T: ToPrimitive>(data: &[T]) -> Result<f64> {
    require_len(data.len(), 1)?;
    let mut sorted = to_f64_vec(data);
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.)
    }
}

/// $n! = \Gamma(n + 1)$, defined for every non-negative real `n`.
pub fn factorial<T: ToPrimitive>(n: T) -> Result<f64> {
    let n = as_f64(&n);
    if n.is_nan() || n < 0. {
        return Err(StatsError::domain(format!(
            "factorial needs a non-negative argument, got {}",
            n
        )));
    }
    Ok(gamma(n + 1.))
}

/// Generalised binomial coefficient $\Gamma(n+1) / (\Gamma(k+1)\Gamma(n-k+1))$.
///
/// No bounds are checked: callers must pass $0 \le k \le n$, anything else
/// yields a meaningless (possibly non-finite) value.
pub fn choose<N: ToPrimitive, K: ToPrimitive>(n: N, k: K) -> f64 {
    let (n, k) = (as_f64(&n), as_f64(&k));
    gamma(n + 1.) / (gamma(k + 1.) * gamma(n - k + 1.))
}

/// $\ln \binom{n}{k}$, finite where [`choose`] would overflow.
pub(crate) fn ln_choose(n: f64, k: f64) -> f64 {
    ln_gamma(n + 1.) - ln_gamma(k + 1.) - ln_gamma(n - k + 1.)
}

/// Elementwise natural logarithm, preserving length and order.
pub fn log_array<T: ToPrimitive>(data: &[T]) -> Array1<f64> {
    Array1::from(to_f64_vec(data)).mapv_into(f64::ln)
}

/// Ordinary least squares fit of $y = a + b x$.
///
/// Returns `(a, b)`. Fails when fewer than two points are given or when every
/// `x` is identical, since the slope is then undefined.
pub fn lsr(points: &[(f64, f64)]) -> Result<(f64, f64)> {
    require_len(points.len(), 2)?;
    let (mut sx, mut sy, mut sxy, mut sxx) = (0., 0., 0., 0.);
    for &(x, y) in points {
        sx += x;
        sy += y;
        sxy += x * y;
        sxx += x * x;
    }
    let n = points.len() as f64;
    let denom = n * sxx - sx * sx;
    if denom == 0. {
        log::warn!("lsr over {} points with identical x values", points.len());
        return Err(StatsError::domain(
            "least squares slope is undefined when all x values coincide",
        ));
    }
    let b = (n * sxy - sx * sy) / denom;
    let a = (sy - b * sx) / n;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1., 2., 3.]), Ok(2.));
        assert_eq!(mean(&[1, 1, 0, 1]), Ok(0.75));
        assert_eq!(
            mean::<f64>(&[]),
            Err(StatsError::InsufficientData { needed: 1, got: 0 })
        );
    }

    #[test]
    fn test_variance() {
        assert_eq!(variance(&[1., 2., 3., 4., 5.]), Ok(2.5));
        assert_eq!(variance(&[1, 2, 3, 4, 5]), Ok(2.5));
        assert_eq!(
            variance(&[1.]),
            Err(StatsError::InsufficientData { needed: 2, got: 1 })
        );
        assert!(variance::<f64>(&[]).is_err());
    }

    #[test]
    fn test_pvariance() {
        assert_eq!(pvariance(&[1., 2., 3., 4., 5.]), Ok(2.));
        assert_eq!(pvariance(&[4.]), Ok(0.));
        assert!(pvariance::<i32>(&[]).is_err());
    }

    #[test]
    fn test_sd() {
        assert_relative_eq!(sd(&[1., 2., 3., 4., 5.]).unwrap(), 2.5f64.sqrt());
        assert_relative_eq!(sd(&[0., 1.]).unwrap(), 0.5f64.sqrt());
        assert!(sd(&[3]).is_err());
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[1., 2., 3., 4.]), Ok(2.5));
        assert_eq!(median(&[3., 1., 2.]), Ok(2.));
        assert_eq!(median(&[12, 13, 12]), Ok(12.));
        assert_eq!(median(&[5]), Ok(5.));
        assert!(median::<f64>(&[]).is_err());
    }

    #[test]
    fn test_median_leaves_input_untouched() {
        let data = vec![3., 1., 2.];
        median(&data).unwrap();
        assert_eq!(data, vec![3., 1., 2.]);
    }

    #[test]
    fn test_factorial() {
        assert_relative_eq!(factorial(0).unwrap(), 1., max_relative = 1e-10);
        assert_relative_eq!(factorial(5).unwrap(), 120., max_relative = 1e-10);
        assert_relative_eq!(factorial(10u64).unwrap(), 3628800., max_relative = 1e-10);
        // 0.5! = sqrt(pi) / 2
        assert_relative_eq!(
            factorial(0.5).unwrap(),
            std::f64::consts::PI.sqrt() / 2.,
            max_relative = 1e-10
        );
        assert!(matches!(factorial(-1), Err(StatsError::Domain(_))));
        assert!(matches!(factorial(-0.5), Err(StatsError::Domain(_))));
    }

    #[test]
    fn test_choose() {
        assert_relative_eq!(choose(5, 2), 10., max_relative = 1e-10);
        assert_relative_eq!(choose(10, 0), 1., max_relative = 1e-10);
        assert_relative_eq!(choose(10, 10), 1., max_relative = 1e-10);
        assert_relative_eq!(choose(52, 5), 2598960., max_relative = 1e-10);
        assert_relative_eq!(choose(4.5, 2), 7.875, max_relative = 1e-10);
        assert_relative_eq!(ln_choose(52., 5.).exp(), 2598960., max_relative = 1e-10);
    }

    #[test]
    fn test_log_array() {
        let data = [1f64, 2., 3.];
        let logged = log_array(&data);
        assert_eq!(logged.len(), data.len());
        for (l, d) in logged.iter().zip(data.iter()) {
            assert_eq!(*l, d.ln());
        }
    }

    #[test]
    fn test_lsr() {
        let points = [(60., 3.1), (61., 3.6), (62., 3.8), (63., 4.0), (65., 4.1)];
        let (a, b) = lsr(&points).unwrap();
        assert_abs_diff_eq!(a, -7.963513513, epsilon = 1e-8);
        assert_abs_diff_eq!(b, 0.187837837, epsilon = 1e-8);
    }

    #[test]
    fn test_lsr_degenerate() {
        assert!(matches!(
            lsr(&[(1., 2.), (1., 3.)]),
            Err(StatsError::Domain(_))
        ));
        assert!(matches!(
            lsr(&[(1., 2.)]),
            Err(StatsError::InsufficientData { .. })
        ));
    }

    proptest! {
        #[test]
        fn variance_relates_to_pvariance(data in proptest::collection::vec(-1e3f64..1e3, 2..50)) {
            let n = data.len() as f64;
            let v = variance(&data).unwrap();
            let pv = pvariance(&data).unwrap();
            prop_assert!(v >= 0.);
            prop_assert!((v * (n - 1.) - pv * n).abs() <= 1e-6 * (1. + v * n));
        }

        #[test]
        fn median_is_bounded_by_sample(data in proptest::collection::vec(-1e3f64..1e3, 1..50)) {
            let m = median(&data).unwrap();
            let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(lo <= m && m <= hi);
        }

        #[test]
        fn lsr_recovers_exact_line(a in -10f64..10., b in -5f64..5.) {
            let points: Vec<(f64, f64)> = (0..10).map(|i| {
                let x = i as f64;
                (x, a + b * x)
            }).collect();
            let (fa, fb) = lsr(&points).unwrap();
            prop_assert!((fa - a).abs() < 1e-9);
            prop_assert!((fb - b).abs() < 1e-9);
        }
    }
}
