use crate::common;
use crate::distributions::DiscreteDistribution;
use crate::error::{Result, StatsError};
use num::ToPrimitive;
use serde::Serialize;
use statrs::function::gamma::ln_gamma;

/// Poisson distribution with rate (mean) `rate`
///
/// The cdf and quantile are linear scans over the pmf starting at zero. Both
/// stop once the terms past the rate underflow to zero, so the cost is bounded
/// by the rate rather than by `k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Poisson {
    rate: f64,
}

impl Poisson {
    pub fn new(rate: f64) -> Result<Self> {
        if !(rate > 0. && rate.is_finite()) {
            return Err(StatsError::domain(format!(
                "poisson rate must be finite and > 0, got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    /// Fits the rate as the sample mean.
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        let rate = common::mean(data)?;
        log::debug!("poisson fit rate = {} from {} values", rate, data.len());
        Self::new(rate)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl DiscreteDistribution for Poisson {
    /// Evaluated as $\exp(k \ln m - m - \ln\Gamma(k+1))$ so neither $m^k$ nor
    /// $k!$ is ever formed.
    fn pmf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.;
        }
        let k = k as f64;
        (k * self.rate.ln() - self.rate - ln_gamma(k + 1.)).exp()
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.;
        }
        let mut total = 0.;
        for i in 0..=k {
            let term = self.pmf(i);
            total += term;
            if total >= 1. || (term == 0. && i as f64 > self.rate) {
                break;
            }
        }
        total.min(1.)
    }

    fn support(&self) -> (i64, Option<i64>) {
        (0, None)
    }

    fn inverse_cdf(&self, p: f64) -> i64 {
        let mut j = 0;
        let mut total = self.pmf(0);
        while total < p {
            j += 1;
            let term = self.pmf(j);
            total += term;
            // past the mode with nothing left to add, the sum cannot reach p
            if term == 0. && j as f64 > self.rate {
                log::warn!(
                    "poisson quantile scan ran out of mass at k = {} (rate {}, p = {})",
                    j,
                    self.rate,
                    p
                );
                break;
            }
        }
        j
    }
}
