use crate::common::ln_choose;
use crate::distributions::DiscreteDistribution;
use crate::error::{Result, StatsError};
use crate::util::check_probability;
use serde::Serialize;

/// Binomial distribution of the number of successes in `n` trials with
/// success probability `p`
///
/// Like [`Poisson`](crate::distributions::Poisson), the cdf and quantile scan
/// the pmf linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    pub fn new(n: u64, p: f64) -> Result<Self> {
        if n > i64::MAX as u64 {
            return Err(StatsError::domain(format!(
                "binomial trial count too large, got {}",
                n
            )));
        }
        Ok(Self {
            n,
            p: check_probability(p)?,
        })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    fn last(&self) -> i64 {
        self.n as i64
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, k: i64) -> f64 {
        let n = self.last();
        if k < 0 || k > n {
            return 0.;
        }
        // the log form below would multiply 0 by -inf at the degenerate ends
        if self.p == 0. {
            return if k == 0 { 1. } else { 0. };
        }
        if self.p == 1. {
            return if k == n { 1. } else { 0. };
        }
        let (n, k) = (n as f64, k as f64);
        (ln_choose(n, k) + k * self.p.ln() + (n - k) * (-self.p).ln_1p()).exp()
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.;
        }
        if k >= self.last() {
            return 1.;
        }
        (0..=k).map(|i| self.pmf(i)).sum::<f64>().min(1.)
    }

    fn support(&self) -> (i64, Option<i64>) {
        (0, Some(self.last()))
    }

    fn inverse_cdf(&self, p: f64) -> i64 {
        let n = self.last();
        let mut j = 0;
        let mut total = self.pmf(0);
        while total < p && j < n {
            j += 1;
            total += self.pmf(j);
        }
        j
    }
}
