//! High level distributions
//!
//! Every distribution implements one of two small capability traits,
//! [`DiscreteDistribution`] or [`ContinuousDistribution`]. An implementor only
//! supplies its density, cdf, support and the raw inverse cdf; argument
//! checking for `quantile` and inverse transform sampling are provided by the
//! traits.
//!
//! Sampling draws $u \sim U(0, 1)$ from the open interval and returns the
//! quantile at $u$, so an infinite support bound is never produced. Each
//! distribution also implements [`rand::distributions::Distribution`] and can
//! therefore be used with `Rng::sample`, `Rng::sample_iter` or
//! `ndarray_rand::RandomExt::random_using`.
use crate::error::{Result, StatsError};
use crate::util::check_probability;
use ndarray::Array1;
use rand::distributions::{Distribution, Open01};
use rand::Rng;

mod bernoulli;
mod binomial;
mod exponential;
mod geometric;
mod laplace;
mod lognormal;
mod normal;
mod poisson;
mod uniform;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use exponential::Exponential;
pub use geometric::Geometric;
pub use laplace::Laplace;
pub use lognormal::LogNormal;
pub use normal::Normal;
pub use poisson::Poisson;
pub use uniform::Uniform;

fn open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Open01.sample(rng)
}

/// Distribution over the integers, sampled through its quantile function
pub trait DiscreteDistribution {
    /// probability mass at `k`, zero outside the support
    fn pmf(&self, k: i64) -> f64;

    fn cdf(&self, k: i64) -> f64;

    /// smallest and (if bounded) largest value of the support
    fn support(&self) -> (i64, Option<i64>);

    /// Smallest `k` with $F(k) \ge p$, for $p \in [0, 1)$.
    ///
    /// No argument checking is done here, use [`quantile`](Self::quantile).
    fn inverse_cdf(&self, p: f64) -> i64;

    /// Quantile (inverse cdf) at probability `p`.
    ///
    /// Fails with [`StatsError::Domain`] if `p` is not in $[0, 1]$, or if
    /// `p == 1` and the support has no upper bound.
    fn quantile(&self, p: f64) -> Result<i64> {
        let p = check_probability(p)?;
        if p == 1. {
            return self.support().1.ok_or_else(|| {
                StatsError::domain("quantile(1) is unbounded for this distribution")
            });
        }
        Ok(self.inverse_cdf(p))
    }

    /// single random value drawn with `rng`
    fn random_using<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.inverse_cdf(open_unit(rng))
    }

    /// `n` independent random values drawn with `rng`, in draw order
    fn random_n_using<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array1<i64> {
        Array1::from_shape_simple_fn(n, || self.random_using(&mut *rng))
    }

    /// single random value drawn from the thread-local generator
    fn random(&self) -> i64 {
        self.random_using(&mut rand::thread_rng())
    }

    fn random_n(&self, n: usize) -> Array1<i64> {
        self.random_n_using(n, &mut rand::thread_rng())
    }
}

/// Distribution over the reals, sampled through its quantile function
pub trait ContinuousDistribution {
    /// probability density at `x`, zero outside the support
    fn pdf(&self, x: f64) -> f64;

    fn cdf(&self, x: f64) -> f64;

    /// lower and upper bound of the support, possibly infinite
    fn support(&self) -> (f64, f64);

    /// Inverse of the cdf for $p \in (0, 1)$.
    ///
    /// No argument checking is done here, use [`quantile`](Self::quantile).
    fn inverse_cdf(&self, p: f64) -> f64;

    /// Quantile (inverse cdf) at probability `p`.
    ///
    /// `quantile(0)` and `quantile(1)` are the support bounds. Fails with
    /// [`StatsError::Domain`] if `p` is not in $[0, 1]$.
    fn quantile(&self, p: f64) -> Result<f64> {
        let p = check_probability(p)?;
        let (lower, upper) = self.support();
        Ok(if p == 0. {
            lower
        } else if p == 1. {
            upper
        } else {
            self.inverse_cdf(p)
        })
    }

    /// single random value drawn with `rng`
    fn random_using<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.inverse_cdf(open_unit(rng))
    }

    /// `n` independent random values drawn with `rng`, in draw order
    fn random_n_using<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Array1<f64> {
        Array1::from_shape_simple_fn(n, || self.random_using(&mut *rng))
    }

    /// single random value drawn from the thread-local generator
    fn random(&self) -> f64 {
        self.random_using(&mut rand::thread_rng())
    }

    fn random_n(&self, n: usize) -> Array1<f64> {
        self.random_n_using(n, &mut rand::thread_rng())
    }
}

macro_rules! impl_rand_distribution {
    (discrete: $($t:ty),+) => {
        $(
            impl Distribution<i64> for $t {
                fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
                    DiscreteDistribution::random_using(self, rng)
                }
            }
        )+
    };
    (continuous: $($t:ty),+) => {
        $(
            impl Distribution<f64> for $t {
                fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
                    ContinuousDistribution::random_using(self, rng)
                }
            }
        )+
    };
}

impl_rand_distribution!(discrete: Bernoulli, Binomial, Geometric, Poisson);
impl_rand_distribution!(continuous: Exponential, Laplace, LogNormal, Normal, Uniform);
