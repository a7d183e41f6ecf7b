// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes prices for European options.
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model the underlying follows
//! ```text
//! dS_t = rf S_t dt + σ S_t dW_t
//! ```
//! and the risk-neutral pricing formula has the closed-form solution
//! ```text
//! d₁ = [ln(S₀/E) + (rf + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! call = S₀ Φ(d₁) - E e^(-rf T) Φ(d₂)
//! put  = E e^(-rf T) Φ(-d₂) - S₀ Φ(-d₁)
//! ```
//! These serve as the deterministic ground truth the Monte Carlo estimators
//! are validated against.

use crate::error::{PricingError, PricingResult};
use crate::math_utils::norm_cdf;
use crate::params::OptionParameters;

/// Black-Scholes call and put prices as a `(call, put)` pair.
///
/// Fails with [`PricingError::DegenerateModel`] when `sigma * sqrt(T)`
/// evaluates to zero (d1/d2 would divide by zero); the degenerate case is an
/// explicit error, never a silent NaN.
pub fn bs_prices(params: &OptionParameters) -> PricingResult<(f64, f64)> {
    params.validate()?;

    let vol_sqrt_t = params.sigma * params.maturity.sqrt();
    if vol_sqrt_t == 0.0 {
        return Err(PricingError::DegenerateModel {
            sigma: params.sigma,
            maturity: params.maturity,
        });
    }

    let d1 = ((params.s0 / params.strike).ln()
        + (params.rate + 0.5 * params.sigma * params.sigma) * params.maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let discounted_strike = params.strike * params.discount_factor();
    let call = params.s0 * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = discounted_strike * norm_cdf(-d2) - params.s0 * norm_cdf(-d1);

    Ok((call, put))
}

/// Black-Scholes call price.
pub fn bs_call_price(params: &OptionParameters) -> PricingResult<f64> {
    bs_prices(params).map(|(call, _)| call)
}

/// Black-Scholes put price.
pub fn bs_put_price(params: &OptionParameters) -> PricingResult<f64> {
    bs_prices(params).map(|(_, put)| put)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        // S0=100, E=100, T=1, rf=0.05, sigma=0.2 -> call ~ 10.45, put ~ 5.57
        let (call, put) = bs_prices(&OptionParameters::default()).expect("valid parameters");

        assert!((call - 10.45).abs() < 0.1, "call = {}", call);
        assert!((put - 5.57).abs() < 0.1, "put = {}", put);
    }

    #[test]
    fn test_put_call_parity_exact() {
        let params = OptionParameters {
            s0: 105.0,
            strike: 98.0,
            maturity: 0.75,
            rate: 0.03,
            sigma: 0.25,
            ..Default::default()
        };
        let (call, put) = bs_prices(&params).expect("valid parameters");

        let parity = params.s0 - params.strike * params.discount_factor();
        assert!((call - put - parity).abs() < 1e-10);
    }

    #[test]
    fn test_single_leg_helpers_match_pair() {
        let params = OptionParameters::default();
        let (call, put) = bs_prices(&params).expect("valid parameters");

        assert_eq!(bs_call_price(&params).expect("valid parameters"), call);
        assert_eq!(bs_put_price(&params).expect("valid parameters"), put);
    }

    #[test]
    fn test_degenerate_vol_time_product_errors() {
        // sigma and maturity each pass positivity, but the product underflows
        // to zero in double precision
        let params = OptionParameters {
            sigma: 1e-300,
            maturity: 1e-200,
            ..Default::default()
        };

        match bs_prices(&params) {
            Err(PricingError::DegenerateModel { .. }) => {}
            other => panic!("expected DegenerateModel, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = OptionParameters {
            sigma: 0.0,
            ..Default::default()
        };
        assert!(bs_prices(&params).is_err());

        let params = OptionParameters {
            s0: f64::NAN,
            ..Default::default()
        };
        assert!(bs_prices(&params).is_err());
    }

    #[test]
    fn test_prices_finite_and_non_negative() {
        for strike in [50.0, 90.0, 100.0, 110.0, 200.0] {
            let params = OptionParameters {
                strike,
                ..Default::default()
            };
            let (call, put) = bs_prices(&params).expect("valid parameters");
            assert!(call.is_finite() && call >= 0.0);
            assert!(put.is_finite() && put >= 0.0);
        }
    }
}
