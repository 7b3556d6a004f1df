use crate::common;
use crate::distributions::ContinuousDistribution;
use crate::error::{Result, StatsError};
use num::ToPrimitive;
use serde::Serialize;

/// Exponential distribution with rate `rate` (mean $1/\lambda$)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    pub fn new(rate: f64) -> Result<Self> {
        if !(rate > 0. && rate.is_finite()) {
            return Err(StatsError::domain(format!(
                "exponential rate must be finite and > 0, got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    /// Fits the rate as the reciprocal of the sample mean.
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        let rate = 1. / common::mean(data)?;
        log::debug!("exponential fit rate = {} from {} values", rate, data.len());
        Self::new(rate)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0. {
            return 0.;
        }
        self.rate * (-self.rate * x).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0. {
            return 0.;
        }
        -(-self.rate * x).exp_m1()
    }

    fn support(&self) -> (f64, f64) {
        (0., f64::INFINITY)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        -(-p).ln_1p() / self.rate
    }
}
