//! Kernel density estimation with a Gaussian kernel
//!
//! The estimate at $x$ is $\hat f(x) = \frac{1}{n}\sum_i \phi_h(x - x_i)$ where
//! $\phi_h$ is the $N(0, h^2)$ density, i.e. an equally weighted mixture of
//! normals centred on the sample points.
use crate::common;
use crate::distributions::{ContinuousDistribution, Normal};
use crate::error::{require_len, Result, StatsError};
use ndarray::{Array1, ArrayView1};
use ndarray_rand::rand_distr::{StandardNormal, Uniform};
use ndarray_rand::RandomExt;
use ndarray_stats::QuantileExt;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid padding in bandwidths on each side of the data, as R's `density()`
const GRID_CUT: f64 = 3.;

/// Silverman's rule-of-thumb bandwidth $1.06\,s\,n^{-1/5}$.
///
/// Only sensible for roughly unimodal, normal-looking data. Needs two points.
pub fn silverman_bandwidth(data: &[f64]) -> Result<f64> {
    let sd = common::sd(data)?;
    Ok(1.06 * sd * (data.len() as f64).powf(-0.2))
}

/// Deserializable bandwidth choice; `None` selects Silverman's rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KdeConfig {
    #[serde(default)]
    pub bandwidth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KernelDensityEstimation {
    data: Array1<f64>,
    bandwidth: f64,
    #[serde(skip)]
    kernel: Normal,
}

impl KernelDensityEstimation {
    /// Builds an estimator over `data`.
    ///
    /// With `bandwidth == None` the bandwidth is chosen by
    /// [`silverman_bandwidth`], which needs at least two points. An explicit
    /// bandwidth must be positive and still needs one point.
    pub fn new(data: &[f64], bandwidth: Option<f64>) -> Result<Self> {
        let bandwidth = match bandwidth {
            Some(h) => {
                require_len(data.len(), 1)?;
                h
            }
            None => {
                let h = silverman_bandwidth(data)?;
                log::debug!("silverman bandwidth {} for {} points", h, data.len());
                h
            }
        };
        let kernel = Normal::with_sd(0., bandwidth).map_err(|_| {
            StatsError::domain(format!("kde bandwidth must be > 0, got {}", bandwidth))
        })?;
        Ok(Self {
            data: Array1::from(data.to_vec()),
            bandwidth,
            kernel,
        })
    }

    pub fn from_config(data: &[f64], config: &KdeConfig) -> Result<Self> {
        Self::new(data, config.bandwidth)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    /// density estimate at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.data.iter().map(|&d| self.kernel.pdf(x - d)).sum::<f64>() / self.len() as f64
    }

    /// density estimate at every point of `xs`
    pub fn evaluate_n(&self, xs: ArrayView1<'_, f64>) -> Array1<f64> {
        xs.mapv(|x| self.evaluate(x))
    }

    /// Evaluates the estimate on `points` evenly spaced values spanning the
    /// data padded by three bandwidths on each side.
    ///
    /// Returns `(xs, densities)`.
    pub fn grid(&self, points: usize) -> (Array1<f64>, Array1<f64>) {
        let lo = *self.data.min_skipnan() - GRID_CUT * self.bandwidth;
        let hi = *self.data.max_skipnan() + GRID_CUT * self.bandwidth;
        let xs = Array1::linspace(lo, hi, points);
        let ys = self.evaluate_n(xs.view());
        (xs, ys)
    }

    /// Smoothed bootstrap draw: a uniformly chosen sample point plus
    /// $N(0, h^2)$ noise.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let i = rng.gen_range(0..self.len());
        let z: f64 = rng.sample(StandardNormal);
        self.data[i] + self.bandwidth * z
    }

    /// `n` independent smoothed bootstrap draws
    pub fn sample_n<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array1<f64> {
        let picks = Array1::random_using(n, Uniform::new(0, self.len()), rng);
        let noise: Array1<f64> = Array1::random_using(n, StandardNormal, rng);
        picks.mapv(|i| self.data[i]) + noise * self.bandwidth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::seeded_rng;
    use approx::assert_abs_diff_eq;

    // R's density() only reports interpolated values, hence the loose tolerance
    const EPSILON: f64 = 1e-3;

    #[test]
    fn test_single_data_point() {
        let kde = KernelDensityEstimation::new(&[0.], Some(1.)).unwrap();
        assert_abs_diff_eq!(kde.evaluate(0.), 0.3989423, epsilon = 1e-7);
    }

    #[test]
    fn test_two_identical_data_points() {
        let kde = KernelDensityEstimation::new(&[0., 0.], Some(1.)).unwrap();
        assert_abs_diff_eq!(kde.evaluate(0.), 0.3989423, epsilon = 1e-7);
    }

    #[test]
    fn test_two_distant_data_points() {
        let kde = KernelDensityEstimation::new(&[0., 10.], Some(1.)).unwrap();
        assert_abs_diff_eq!(kde.evaluate(0.), 0.1994125, epsilon = EPSILON);
    }

    #[test]
    fn test_two_interacting_data_points() {
        let kde = KernelDensityEstimation::new(&[0., 1.], Some(1.)).unwrap();
        assert_abs_diff_eq!(kde.evaluate(0.), 0.320532, epsilon = EPSILON);
    }

    #[test]
    fn test_numerous_data_points() {
        let data = [-2.1, -1.3, -0.4, 1.9, 5.1, 6.2];
        let kde = KernelDensityEstimation::new(&data, Some(2.25f64.sqrt())).unwrap();
        assert_abs_diff_eq!(kde.evaluate(0.), 0.1099665, epsilon = EPSILON);
        assert_abs_diff_eq!(kde.evaluate(7.), 0.05850251, epsilon = EPSILON);
        let at = kde.evaluate_n(ndarray::array![0., 7.].view());
        assert_eq!(at[0], kde.evaluate(0.));
        assert_eq!(at[1], kde.evaluate(7.));
    }

    #[test]
    fn test_silverman_bandwidth() {
        let kde = KernelDensityEstimation::new(&[0., 1.], None).unwrap();
        assert_abs_diff_eq!(kde.bandwidth(), 0.6525065391, epsilon = 1e-10);
        assert_abs_diff_eq!(kde.evaluate(0.), 0.4003494754, epsilon = EPSILON);
    }

    #[test]
    fn test_automatic_bandwidth_needs_two_points() {
        assert_eq!(
            KernelDensityEstimation::new(&[], None),
            Err(StatsError::InsufficientData { needed: 2, got: 0 })
        );
        assert_eq!(
            KernelDensityEstimation::new(&[1.], None),
            Err(StatsError::InsufficientData { needed: 2, got: 1 })
        );
        // constant data has zero spread, so no usable bandwidth
        assert!(matches!(
            KernelDensityEstimation::new(&[3., 3.], None),
            Err(StatsError::Domain(_))
        ));
    }

    #[test]
    fn test_explicit_bandwidth_checks() {
        assert!(matches!(
            KernelDensityEstimation::new(&[], Some(1.)),
            Err(StatsError::InsufficientData { .. })
        ));
        assert!(matches!(
            KernelDensityEstimation::new(&[1.], Some(0.)),
            Err(StatsError::Domain(_))
        ));
        assert!(matches!(
            KernelDensityEstimation::new(&[1.], Some(-2.)),
            Err(StatsError::Domain(_))
        ));
    }

    #[test]
    fn test_config() {
        let fixed: KdeConfig = serde_json::from_str(r#"{"bandwidth": 1.0}"#).unwrap();
        let kde = KernelDensityEstimation::from_config(&[0.], &fixed).unwrap();
        assert_eq!(kde.bandwidth(), 1.);

        let auto: KdeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(auto, KdeConfig::default());
        let kde = KernelDensityEstimation::from_config(&[0., 1.], &auto).unwrap();
        assert_abs_diff_eq!(kde.bandwidth(), 0.6525065391, epsilon = 1e-10);
    }

    #[test]
    fn test_serialize_reports_data_and_bandwidth() {
        let kde = KernelDensityEstimation::new(&[0.5, 1.5], Some(2.)).unwrap();
        let json = serde_json::to_value(&kde).unwrap();
        assert_eq!(json["bandwidth"], 2.);
        assert_eq!(json["data"]["data"], serde_json::json!([0.5, 1.5]));
        assert!(json.get("kernel").is_none());
    }

    #[test]
    fn test_grid_integrates_to_one() {
        let data = [-2.1, -1.3, -0.4, 1.9, 5.1, 6.2];
        let kde = KernelDensityEstimation::new(&data, Some(1.5)).unwrap();
        let (xs, ys) = kde.grid(2048);
        assert_eq!(xs.len(), 2048);
        assert_abs_diff_eq!(xs[0], -2.1 - 4.5, epsilon = 1e-12);
        assert_abs_diff_eq!(xs[2047], 6.2 + 4.5, epsilon = 1e-12);
        let step = xs[1] - xs[0];
        let area = ys.sum() * step;
        // three bandwidths of padding leave about 0.3% of the mass outside
        assert_abs_diff_eq!(area, 1., epsilon = 5e-3);
        assert!(ys.iter().all(|&y| y >= 0.));
    }

    #[test]
    fn test_sampling() {
        let data = [-2.1, -1.3, -0.4, 1.9, 5.1, 6.2];
        let kde = KernelDensityEstimation::new(&data, Some(0.5)).unwrap();
        let a = kde.sample_n(4000, &mut seeded_rng(8));
        let b = kde.sample_n(4000, &mut seeded_rng(8));
        assert_eq!(a, b);
        let data_mean = common::mean(&data).unwrap();
        let sample_mean = a.mean().unwrap();
        assert!((sample_mean - data_mean).abs() < 0.2, "{}", sample_mean);

        let x = kde.sample(&mut seeded_rng(1));
        assert!(x.is_finite());
    }
}
