//! Gaussian error function family
//!
//! The forward functions come from [statrs](https://crates.io/crates/statrs);
//! the inverse is a rational approximation polished by Newton steps against
//! the forward `erf`.
use crate::error::{Result, StatsError};
pub use statrs::function::erf::{erf, erfc};
use std::f64::consts::FRAC_2_SQRT_PI;

const CENTRAL_BAND: f64 = 0.7;
const A: [f64; 4] = [0.886226899, -1.645349621, 0.914624893, -0.140543331];
const B: [f64; 4] = [-2.118377725, 1.442710462, -0.329097515, 0.012229801];
const C: [f64; 4] = [-1.970840454, -1.624906493, 3.429567803, 1.641345311];
const D: [f64; 2] = [3.543889200, 1.637067800];

fn newton_step(x: f64, y: f64) -> f64 {
    x - (erf(x) - y) / (FRAC_2_SQRT_PI * (-x * x).exp())
}

/// the inverse error function $\mathrm{erf}^{-1}(y)$ for $|y| < 1$
///
/// $|y| \le 0.7$ uses a central rational approximation in $y^2$; the tails use
/// one in $\sqrt{-\ln((1 - |y|)/2)}$. Either estimate is then refined with
/// exactly two Newton iterations.
///
/// $\mathrm{erf}^{-1}(\pm 1)$ diverges and $|y| > 1$ (or NaN) is outside the
/// domain; both are reported as [`StatsError::Domain`].
pub fn erfinv(y: f64) -> Result<f64> {
    let abs_y = y.abs();
    let x = if abs_y <= CENTRAL_BAND {
        let z = y * y;
        let num = ((A[3] * z + A[2]) * z + A[1]) * z + A[0];
        let den = (((B[3] * z + B[2]) * z + B[1]) * z + B[0]) * z + 1.;
        y * num / den
    } else if abs_y < 1. {
        let z = (-((1. - abs_y) / 2.).ln()).sqrt();
        let num = ((C[3] * z + C[2]) * z + C[1]) * z + C[0];
        let den = (D[1] * z + D[0]) * z + 1.;
        y.signum() * num / den
    } else if abs_y == 1. {
        return Err(StatsError::domain(format!("erfinv({}) diverges", y)));
    } else {
        return Err(StatsError::domain(format!(
            "erfinv needs |y| <= 1, got {}",
            y
        )));
    };
    Ok(newton_step(newton_step(x, y), y))
}
