use crate::common;
use crate::distributions::DiscreteDistribution;
use crate::error::{Result, StatsError};
use num::ToPrimitive;
use serde::Serialize;

/// Geometric distribution of the number of trials up to and including the
/// first success, support $\{1, 2, \dots\}$
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    pub fn new(p: f64) -> Result<Self> {
        if !(p > 0. && p <= 1.) {
            return Err(StatsError::domain(format!(
                "geometric success probability must lie in (0, 1], got {}",
                p
            )));
        }
        Ok(Self { p })
    }

    /// Fits `p` as the reciprocal of the sample mean.
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        let p = 1. / common::mean(data)?;
        log::debug!("geometric fit p = {} from {} values", p, data.len());
        Self::new(p)
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DiscreteDistribution for Geometric {
    fn pmf(&self, k: i64) -> f64 {
        if k < 1 {
            return 0.;
        }
        if self.p == 1. {
            return if k == 1 { 1. } else { 0. };
        }
        ((k - 1) as f64 * (-self.p).ln_1p()).exp() * self.p
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < 1 {
            return 0.;
        }
        // 1 - (1 - p)^k, accurate for p close to zero
        -(k as f64 * (-self.p).ln_1p()).exp_m1()
    }

    fn support(&self) -> (i64, Option<i64>) {
        if self.p == 1. {
            (1, Some(1))
        } else {
            (1, None)
        }
    }

    fn inverse_cdf(&self, p: f64) -> i64 {
        if self.p == 1. {
            return 1;
        }
        let k = ((-p).ln_1p() / (-self.p).ln_1p()).ceil();
        (k as i64).max(1)
    }
}
