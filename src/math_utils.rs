// src/math_utils.rs
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::erf;
use std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function Φ(x)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Inverse standard normal CDF (quantile function).
///
/// `p` must lie strictly inside (0, 1); callers validate before invoking.
pub fn inverse_norm_cdf(p: f64) -> f64 {
    let standard = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    standard.inverse_cdf(p)
}

/// Bessel-corrected sample standard deviation (divisor n - 1).
///
/// Returns 0.0 for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    (sum_sq / (n - 1) as f64).sqrt()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
