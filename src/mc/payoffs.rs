// src/mc/payoffs.rs
//! European option payoff functions.
//!
//! - **Call**: max(S_T - E, 0) - right to buy at strike E
//! - **Put**: max(E - S_T, 0) - right to sell at strike E
//!
//! Payoffs are pure functions of the terminal price and strike. Non-finite
//! inputs propagate (a NaN terminal price yields a NaN payoff); note that
//! `f64::max` would swallow NaN and return 0.0, so the implementations branch
//! explicitly.

/// European call payoff: max(S_T - E, 0)
pub fn call_payoff(terminal_price: f64, strike: f64) -> f64 {
    let intrinsic = terminal_price - strike;
    if intrinsic.is_nan() {
        return intrinsic;
    }
    intrinsic.max(0.0)
}

/// European put payoff: max(E - S_T, 0)
pub fn put_payoff(terminal_price: f64, strike: f64) -> f64 {
    let intrinsic = strike - terminal_price;
    if intrinsic.is_nan() {
        return intrinsic;
    }
    intrinsic.max(0.0)
}

/// Contract side of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff at expiry for this contract side.
    pub fn payoff(&self, terminal_price: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => call_payoff(terminal_price, strike),
            OptionType::Put => put_payoff(terminal_price, strike),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        assert_eq!(call_payoff(110.0, 100.0), 10.0);
        assert_eq!(call_payoff(90.0, 100.0), 0.0);
        assert_eq!(call_payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        assert_eq!(put_payoff(90.0, 100.0), 10.0);
        assert_eq!(put_payoff(110.0, 100.0), 0.0);
        assert_eq!(put_payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_payoffs_never_negative() {
        for s_t in [0.0, 1e-10, 50.0, 100.0, 1e10] {
            for strike in [1e-10, 50.0, 100.0, 1e10] {
                assert!(call_payoff(s_t, strike) >= 0.0);
                assert!(put_payoff(s_t, strike) >= 0.0);
            }
        }
    }

    #[test]
    fn test_nan_propagates() {
        assert!(call_payoff(f64::NAN, 100.0).is_nan());
        assert!(put_payoff(f64::NAN, 100.0).is_nan());
        assert!(call_payoff(100.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_infinite_terminal_price() {
        assert_eq!(call_payoff(f64::INFINITY, 100.0), f64::INFINITY);
        assert_eq!(put_payoff(f64::INFINITY, 100.0), 0.0);
        assert_eq!(put_payoff(f64::NEG_INFINITY, 100.0), f64::INFINITY);
    }

    #[test]
    fn test_option_type_dispatch() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
    }
}
