//! `statkit` provides closed-form univariate probability distributions,
//! descriptive statistics, Gaussian kernel density estimation and the error
//! function family.
//!
//! Distributions are built either from parameters or fitted to data, and
//! every distribution can be sampled by inverse transform through any
//! [`rand::Rng`]. Fallible operations return [`Result`] with a [`StatsError`].
//!
//! ```
//! use statkit::distributions::{ContinuousDistribution, Normal};
//! use statkit::util::seeded_rng;
//!
//! let normal = Normal::from_data(&[1., 2., 3., 4., 5.]).unwrap();
//! assert_eq!(normal.mean(), 3.);
//! let xs = normal.random_n_using(100, &mut seeded_rng(0));
//! assert_eq!(xs.len(), 100);
//! ```
extern crate ndarray;
extern crate ndarray_rand;
extern crate ndarray_stats;
extern crate statrs;

pub mod common;
pub mod config;
pub mod distributions;
pub mod error;
pub mod kde;
pub mod special;
pub mod util;

pub use config::{AnyDistribution, DistributionConfig};
pub use distributions::{ContinuousDistribution, DiscreteDistribution};
pub use error::{Result, StatsError};
pub use kde::KernelDensityEstimation;

/// `erf`/`erfc` family of error functions
///
/// `erf`, `erfc` and `erfc_inv` come from [statrs](https://crates.io/crates/statrs);
/// `erfinv` is the rational approximation in [`special`].
pub mod gauss {
    pub use crate::special::{erf, erfc, erfinv};
    pub use statrs::function::erf::erfc_inv;
}
