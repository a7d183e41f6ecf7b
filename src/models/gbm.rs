// src/models/gbm.rs
//! Geometric Brownian Motion terminal-price generator.
//!
//! Under the risk-neutral measure the asset follows
//! ```text
//! dS_t = rf S_t dt + σ S_t dW_t
//! ```
//! with exact terminal solution
//! ```text
//! S_T = S_0 * exp(T (rf - σ²/2) + σ √T Z),   Z ~ N(0,1)
//! ```
//! European payoffs depend only on S_T, so no intermediate path points are
//! simulated.

use rayon::prelude::*;

pub struct Gbm {
    pub s0: f64,
    pub rate: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, rate: f64, sigma: f64) -> Self {
        Gbm { s0, rate, sigma }
    }

    /// Terminal price for a single standard-normal draw.
    ///
    /// Pure double-precision arithmetic, no clamping and no failure mode:
    /// degenerate inputs (`t == 0` or `sigma == 0`) collapse to the
    /// deterministic forward value `s0 * exp(rate * t)` with zero variance.
    pub fn terminal_price(&self, t: f64, z: f64) -> f64 {
        self.s0 * (t * (self.rate - 0.5 * self.sigma * self.sigma) + self.sigma * t.sqrt() * z).exp()
    }

    /// Terminal prices for a sequence of draws, evaluated in parallel.
    ///
    /// Output order matches the input draw order.
    pub fn terminal_prices(&self, t: f64, draws: &[f64]) -> Vec<f64> {
        draws
            .par_iter()
            .map(|&z| self.terminal_price(t, z))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_price_formula() {
        let gbm = Gbm::new(100.0, 0.05, 0.2);
        let expected = 100.0 * (1.0f64 * (0.05 - 0.02) + 0.2 * 1.5).exp();
        assert!((gbm.terminal_price(1.0, 1.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let gbm = Gbm::new(100.0, 0.05, 0.0);
        let forward = 100.0 * (0.05f64).exp();

        for &z in &[-3.0, -1.0, 0.0, 1.0, 3.0] {
            assert!((gbm.terminal_price(1.0, z) - forward).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_maturity_returns_spot() {
        let gbm = Gbm::new(100.0, 0.05, 0.2);
        for &z in &[-2.0, 0.0, 2.0] {
            assert!((gbm.terminal_price(0.0, z) - 100.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_monotone_in_draw() {
        let gbm = Gbm::new(100.0, 0.05, 0.2);
        assert!(gbm.terminal_price(1.0, -1.0) < gbm.terminal_price(1.0, 0.0));
        assert!(gbm.terminal_price(1.0, 0.0) < gbm.terminal_price(1.0, 1.0));
    }

    #[test]
    fn test_terminal_prices_elementwise() {
        let gbm = Gbm::new(100.0, 0.05, 0.2);
        let draws = [-1.0, 0.0, 1.0];
        let prices = gbm.terminal_prices(1.0, &draws);

        assert_eq!(prices.len(), draws.len());
        for (i, &z) in draws.iter().enumerate() {
            assert_eq!(prices[i], gbm.terminal_price(1.0, z));
        }
    }
}
