// src/params.rs
//! Option contract and simulation parameters.

use crate::error::{validation::*, PricingResult};

/// Moneyness classification using the call-option convention on `strike / s0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moneyness {
    /// strike / s0 < 0.95
    InTheMoney,
    /// 0.95 <= strike / s0 <= 1.05
    AtTheMoney,
    /// strike / s0 > 1.05
    OutOfTheMoney,
}

/// Immutable parameter set for a single-asset European option.
///
/// All pricing entry points validate these before simulating; invalid values
/// fail fast with a descriptive error and are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParameters {
    /// Initial asset price S0 (> 0)
    pub s0: f64,
    /// Strike price E (> 0)
    pub strike: f64,
    /// Time to maturity T in years (> 0)
    pub maturity: f64,
    /// Risk-free rate rf (finite, any sign)
    pub rate: f64,
    /// Volatility sigma (> 0)
    pub sigma: f64,
    /// Number of Monte Carlo iterations N (>= 1)
    pub iterations: usize,
}

impl OptionParameters {
    /// Check every invariant: positive finite S0/E/T/sigma, finite rate,
    /// iteration count within bounds.
    pub fn validate(&self) -> PricingResult<()> {
        validate_finite("s0", self.s0)?;
        validate_positive("s0", self.s0)?;
        validate_finite("strike", self.strike)?;
        validate_positive("strike", self.strike)?;
        validate_finite("maturity", self.maturity)?;
        validate_positive("maturity", self.maturity)?;
        validate_finite("rate", self.rate)?;
        validate_finite("sigma", self.sigma)?;
        validate_positive("sigma", self.sigma)?;
        validate_iterations(self.iterations)?;
        Ok(())
    }

    /// Discount factor exp(-rf * T) applied to the mean payoff.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Moneyness ratio strike / s0 (> 1 for OTM calls, < 1 for ITM calls).
    pub fn moneyness_ratio(&self) -> f64 {
        self.strike / self.s0
    }

    /// Classify the contract with a 5% at-the-money band around parity.
    pub fn moneyness(&self) -> Moneyness {
        let ratio = self.moneyness_ratio();
        if ratio < 0.95 {
            Moneyness::InTheMoney
        } else if ratio > 1.05 {
            Moneyness::OutOfTheMoney
        } else {
            Moneyness::AtTheMoney
        }
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        OptionParameters {
            s0: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            sigma: 0.2,
            iterations: 100_000,
        }
    }
}
