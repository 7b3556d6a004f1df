use crate::distributions::ContinuousDistribution;
use crate::error::{Result, StatsError};
use serde::Serialize;

/// Continuous uniform distribution on $[a, b]$
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Uniform {
    a: f64,
    b: f64,
}

impl Uniform {
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && a < b) {
            return Err(StatsError::domain(format!(
                "uniform bounds must be finite with a < b, got a = {}, b = {}",
                a, b
            )));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl ContinuousDistribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x > self.a && x < self.b {
            1. / (self.b - self.a)
        } else {
            0.
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.a {
            0.
        } else if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            1.
        }
    }

    fn support(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        p * (self.b - self.a) + self.a
    }
}
