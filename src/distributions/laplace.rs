use crate::common;
use crate::distributions::ContinuousDistribution;
use crate::error::{Result, StatsError};
use crate::util::as_f64;
use num::ToPrimitive;
use serde::Serialize;

/// Laplace (double exponential) distribution with location `mean` and scale `b`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Laplace {
    mean: f64,
    scale: f64,
}

impl Laplace {
    pub fn new(mean: f64, scale: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(StatsError::domain(format!(
                "laplace mean must be finite, got {}",
                mean
            )));
        }
        if !(scale > 0. && scale.is_finite()) {
            return Err(StatsError::domain(format!(
                "laplace scale must be finite and > 0, got {}",
                scale
            )));
        }
        Ok(Self { mean, scale })
    }

    /// Fits the location as the sample median and the scale as the mean
    /// absolute deviation around it.
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        let m = common::median(data)?;
        let b = data
            .iter()
            .map(|x| (as_f64(x) - m).abs())
            .sum::<f64>()
            / data.len() as f64;
        log::debug!("laplace fit mean = {}, scale = {}", m, b);
        Self::new(m, b)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for Laplace {
    fn pdf(&self, x: f64) -> f64 {
        (-(x - self.mean).abs() / self.scale).exp() / (2. * self.scale)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.mean {
            ((x - self.mean) / self.scale).exp() / 2.
        } else {
            1. - ((self.mean - x) / self.scale).exp() / 2.
        }
    }

    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        if p <= 0.5 {
            self.mean + self.scale * (2. * p).ln()
        } else {
            self.mean - self.scale * (2. * (1. - p)).ln()
        }
    }
}
