use crate::common;
use crate::distributions::normal::gaussian_quantile;
use crate::distributions::ContinuousDistribution;
use crate::error::{Result, StatsError};
use crate::special::erf;
use crate::util::as_f64;
use num::ToPrimitive;
use serde::Serialize;
use std::f64::consts::TAU;

/// Log-normal distribution: $\ln X \sim N(\mu, \sigma^2)$
///
/// Both parameters live on the log scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogNormal {
    mean_log: f64,
    variance_log: f64,
}

impl LogNormal {
    pub fn new(mean_log: f64, variance_log: f64) -> Result<Self> {
        if !mean_log.is_finite() {
            return Err(StatsError::domain(format!(
                "log-normal mean_log must be finite, got {}",
                mean_log
            )));
        }
        if !(variance_log > 0. && variance_log.is_finite()) {
            return Err(StatsError::domain(format!(
                "log-normal variance_log must be finite and > 0, got {}",
                variance_log
            )));
        }
        Ok(Self {
            mean_log,
            variance_log,
        })
    }

    /// Log-scale mean and standard deviation parameterisation.
    pub fn with_sd_log(mean_log: f64, sd_log: f64) -> Result<Self> {
        if !(sd_log > 0.) {
            return Err(StatsError::domain(format!(
                "log-normal sd_log must be > 0, got {}",
                sd_log
            )));
        }
        Self::new(mean_log, sd_log * sd_log)
    }

    /// Fits mean and unbiased variance of the elementwise log of a strictly
    /// positive sample; needs two points.
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        if let Some(x) = data.iter().map(as_f64).find(|x| !(*x > 0.)) {
            return Err(StatsError::domain(format!(
                "log-normal data must be positive, got {}",
                x
            )));
        }
        let logs = common::log_array(data).to_vec();
        let variance_log = common::variance(&logs)?;
        let mean_log = common::mean(&logs)?;
        log::debug!(
            "log-normal fit mean_log = {}, variance_log = {}",
            mean_log,
            variance_log
        );
        Self::new(mean_log, variance_log)
    }

    pub fn mean_log(&self) -> f64 {
        self.mean_log
    }

    pub fn variance_log(&self) -> f64 {
        self.variance_log
    }
}

impl ContinuousDistribution for LogNormal {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0. {
            return 0.;
        }
        (-(x.ln() - self.mean_log).powi(2) / (2. * self.variance_log)).exp()
            / (x * (TAU * self.variance_log).sqrt())
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0. {
            return 0.;
        }
        0.5 + 0.5 * erf((x.ln() - self.mean_log) / (2. * self.variance_log).sqrt())
    }

    fn support(&self) -> (f64, f64) {
        (0., f64::INFINITY)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        gaussian_quantile(self.mean_log, self.variance_log, p).exp()
    }
}
