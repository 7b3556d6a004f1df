use crate::common;
use crate::distributions::ContinuousDistribution;
use crate::error::{Result, StatsError};
use crate::special::{erf, erfinv};
use num::ToPrimitive;
use serde::Serialize;
use std::f64::consts::TAU;

/// $\mu + \sqrt{2\sigma^2}\,\mathrm{erf}^{-1}(2p - 1)$
///
/// `2p - 1` rounds to $\pm 1$ for `p` within an ulp of 0 or 1; the quantile
/// there is the infinite limit.
pub(crate) fn gaussian_quantile(mean: f64, variance: f64, p: f64) -> f64 {
    match erfinv(2. * p - 1.) {
        Ok(z) => mean + (2. * variance).sqrt() * z,
        Err(_) => (p - 0.5).signum() * f64::INFINITY,
    }
}

/// Normal distribution parameterised by its mean and variance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normal {
    mean: f64,
    variance: f64,
}

impl Normal {
    pub fn new(mean: f64, variance: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(StatsError::domain(format!(
                "normal mean must be finite, got {}",
                mean
            )));
        }
        if !(variance > 0. && variance.is_finite()) {
            return Err(StatsError::domain(format!(
                "normal variance must be finite and > 0, got {}",
                variance
            )));
        }
        Ok(Self { mean, variance })
    }

    /// Mean and standard deviation parameterisation.
    pub fn with_sd(mean: f64, sd: f64) -> Result<Self> {
        if !(sd > 0.) {
            return Err(StatsError::domain(format!(
                "normal standard deviation must be > 0, got {}",
                sd
            )));
        }
        Self::new(mean, sd * sd)
    }

    /// Fits the sample mean and unbiased sample variance; needs two points.
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        let variance = common::variance(data)?;
        let mean = common::mean(data)?;
        log::debug!("normal fit mean = {}, variance = {}", mean, variance);
        Self::new(mean, variance)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn sd(&self) -> f64 {
        self.variance.sqrt()
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        (-(x - self.mean).powi(2) / (2. * self.variance)).exp() / (TAU * self.variance).sqrt()
    }

    fn cdf(&self, x: f64) -> f64 {
        (1. + erf((x - self.mean) / (2. * self.variance).sqrt())) / 2.
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        gaussian_quantile(self.mean, self.variance, p)
    }
}
