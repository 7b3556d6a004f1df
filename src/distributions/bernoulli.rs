use crate::common;
use crate::distributions::DiscreteDistribution;
use crate::error::Result;
use crate::util::check_probability;
use num::ToPrimitive;
use serde::Serialize;

/// Bernoulli distribution: 1 with probability `p`, 0 otherwise
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    pub fn new(p: f64) -> Result<Self> {
        Ok(Self {
            p: check_probability(p)?,
        })
    }

    /// Fits `p` as the mean of a sample of 0/1 outcomes.
    pub fn from_data<T: ToPrimitive>(data: &[T]) -> Result<Self> {
        let p = common::mean(data)?;
        log::debug!("bernoulli fit p = {} from {} values", p, data.len());
        Self::new(p)
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DiscreteDistribution for Bernoulli {
    fn pmf(&self, k: i64) -> f64 {
        match k {
            0 => 1. - self.p,
            1 => self.p,
            _ => 0.,
        }
    }

    fn cdf(&self, k: i64) -> f64 {
        if k < 0 {
            0.
        } else if k < 1 {
            1. - self.p
        } else {
            1.
        }
    }

    fn support(&self) -> (i64, Option<i64>) {
        (0, Some(1))
    }

    fn inverse_cdf(&self, p: f64) -> i64 {
        if p < 1. - self.p {
            0
        } else {
            1
        }
    }
}
