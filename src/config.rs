//! Serde-loadable distribution descriptions
//!
//! A [`DistributionConfig`] names a family and its parameters, e.g.
//! `{"family": "normal", "mean": 0.0, "variance": 1.0}`. Building it runs the
//! same validation as the parameter constructors.
use crate::distributions::{
    Bernoulli, Binomial, ContinuousDistribution, DiscreteDistribution, Exponential, Geometric,
    Laplace, LogNormal, Normal, Poisson, Uniform,
};
use crate::error::Result;
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DistributionConfig {
    Bernoulli { p: f64 },
    Laplace { mean: f64, scale: f64 },
    Poisson { rate: f64 },
    Geometric { p: f64 },
    Exponential { rate: f64 },
    Binomial { n: u64, p: f64 },
    Normal { mean: f64, variance: f64 },
    LogNormal { mean_log: f64, variance_log: f64 },
    Uniform { a: f64, b: f64 },
}

impl DistributionConfig {
    pub fn build(&self) -> Result<AnyDistribution> {
        Ok(match *self {
            Self::Bernoulli { p } => AnyDistribution::Bernoulli(Bernoulli::new(p)?),
            Self::Laplace { mean, scale } => AnyDistribution::Laplace(Laplace::new(mean, scale)?),
            Self::Poisson { rate } => AnyDistribution::Poisson(Poisson::new(rate)?),
            Self::Geometric { p } => AnyDistribution::Geometric(Geometric::new(p)?),
            Self::Exponential { rate } => AnyDistribution::Exponential(Exponential::new(rate)?),
            Self::Binomial { n, p } => AnyDistribution::Binomial(Binomial::new(n, p)?),
            Self::Normal { mean, variance } => {
                AnyDistribution::Normal(Normal::new(mean, variance)?)
            }
            Self::LogNormal {
                mean_log,
                variance_log,
            } => AnyDistribution::LogNormal(LogNormal::new(mean_log, variance_log)?),
            Self::Uniform { a, b } => AnyDistribution::Uniform(Uniform::new(a, b)?),
        })
    }
}

/// Any of the supported distributions, for callers that pick the family at
/// run time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyDistribution {
    Bernoulli(Bernoulli),
    Laplace(Laplace),
    Poisson(Poisson),
    Geometric(Geometric),
    Exponential(Exponential),
    Binomial(Binomial),
    Normal(Normal),
    LogNormal(LogNormal),
    Uniform(Uniform),
}

macro_rules! dispatch {
    ($self:expr, discrete $d:ident => $de:expr, continuous $c:ident => $ce:expr) => {
        match $self {
            AnyDistribution::Bernoulli($d) => $de,
            AnyDistribution::Poisson($d) => $de,
            AnyDistribution::Geometric($d) => $de,
            AnyDistribution::Binomial($d) => $de,
            AnyDistribution::Laplace($c) => $ce,
            AnyDistribution::Exponential($c) => $ce,
            AnyDistribution::Normal($c) => $ce,
            AnyDistribution::LogNormal($c) => $ce,
            AnyDistribution::Uniform($c) => $ce,
        }
    };
}

impl AnyDistribution {
    pub fn is_discrete(&self) -> bool {
        dispatch!(self, discrete _d => true, continuous _c => false)
    }

    /// $P(X \le x)$; discrete families evaluate at $\lfloor x \rfloor$
    pub fn cdf(&self, x: f64) -> f64 {
        dispatch!(self,
            discrete d => {
                if x.is_nan() {
                    f64::NAN
                } else if x == f64::INFINITY {
                    1.
                } else if x == f64::NEG_INFINITY {
                    0.
                } else {
                    d.cdf(x.floor() as i64)
                }
            },
            continuous c => c.cdf(x)
        )
    }

    /// Quantile at `p`, discrete values widened to `f64`.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        dispatch!(self,
            discrete d => d.quantile(p).map(|k| k as f64),
            continuous c => c.quantile(p)
        )
    }

    pub fn random_using<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        dispatch!(self,
            discrete d => d.random_using(rng) as f64,
            continuous c => c.random_using(rng)
        )
    }

    pub fn random_n_using<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array1<f64> {
        dispatch!(self,
            discrete d => d.random_n_using(n, rng).mapv(|k| k as f64),
            continuous c => c.random_n_using(n, rng)
        )
    }

    /// The description this distribution was (or could have been) built from.
    pub fn config(&self) -> DistributionConfig {
        match *self {
            Self::Bernoulli(d) => DistributionConfig::Bernoulli { p: d.p() },
            Self::Laplace(d) => DistributionConfig::Laplace {
                mean: d.mean(),
                scale: d.scale(),
            },
            Self::Poisson(d) => DistributionConfig::Poisson { rate: d.rate() },
            Self::Geometric(d) => DistributionConfig::Geometric { p: d.p() },
            Self::Exponential(d) => DistributionConfig::Exponential { rate: d.rate() },
            Self::Binomial(d) => DistributionConfig::Binomial { n: d.n(), p: d.p() },
            Self::Normal(d) => DistributionConfig::Normal {
                mean: d.mean(),
                variance: d.variance(),
            },
            Self::LogNormal(d) => DistributionConfig::LogNormal {
                mean_log: d.mean_log(),
                variance_log: d.variance_log(),
            },
            Self::Uniform(d) => DistributionConfig::Uniform { a: d.a(), b: d.b() },
        }
    }
}
