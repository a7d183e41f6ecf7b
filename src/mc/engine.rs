// src/mc/engine.rs
//! Monte Carlo pricing engine for European options under GBM.
//!
//! # Math Framework
//!
//! Simulates the risk-neutral GBM terminal value
//! ```text
//! S_T = S_0 * exp((rf - σ²/2)T + σ√T Z),   Z ~ N(0,1)
//! ```
//! evaluates the payoff per draw, and discounts the mean once:
//! ```text
//! price = exp(-rf T) * mean(payoffs)
//! ```
//! (mean first, then a single discount multiplication - the two orders differ
//! only in last-bit rounding, this crate fixes mean-then-discount).
//!
//! # Variance Reduction
//!
//! [`Sampling::Antithetic`] pairs every draw Z with -Z. The paired payoffs are
//! negatively correlated, so the estimator keeps the same expectation at lower
//! variance than plain sampling with the same draw budget.
//!
//! # Determinism
//!
//! Draws come from a [`NormalSource`] seeded per call, and the parallel payoff
//! reduction sums fixed-size chunk totals in input order. The result therefore
//! depends only on the configuration and seed, never on thread scheduling.

use crate::error::{PricingError, PricingResult};
use crate::mc::payoffs::OptionType;
use crate::models::gbm::Gbm;
use crate::params::OptionParameters;
use crate::rng::NormalSource;
use rayon::prelude::*;

/// Fixed chunk size for the order-independent parallel payoff reduction.
const REDUCTION_CHUNK: usize = 8192;

/// Draw-generation strategy for a pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// N independent standard normals.
    Standard,
    /// N/2 independent normals plus their negations (floored to an even
    /// count; requires N >= 2).
    Antithetic,
}

#[derive(Debug, Clone)]
pub struct McConfig {
    pub params: OptionParameters,
    pub option_type: OptionType,
    pub sampling: Sampling,
    pub seed: u64,
}

impl McConfig {
    /// Validate the configuration before any simulation runs.
    pub fn validate(&self) -> PricingResult<()> {
        self.params.validate()?;

        if self.sampling == Sampling::Antithetic && self.params.iterations < 2 {
            return Err(PricingError::InsufficientSamples {
                method: "antithetic pricing".to_string(),
                required: 2,
                actual: self.params.iterations,
            });
        }

        Ok(())
    }
}

impl Default for McConfig {
    fn default() -> Self {
        McConfig {
            params: OptionParameters::default(),
            option_type: OptionType::Call,
            sampling: Sampling::Standard,
            seed: 42,
        }
    }
}

/// Terminal prices and payoffs retained from a single pricing run.
///
/// Produced only on explicit request via [`mc_price_with_batch`]; the common
/// scalar path never materialises it.
#[derive(Debug, Clone)]
pub struct SimulationBatch {
    pub terminal_prices: Vec<f64>,
    pub payoffs: Vec<f64>,
}

impl SimulationBatch {
    pub fn len(&self) -> usize {
        self.terminal_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminal_prices.is_empty()
    }
}

/// Two-sided confidence bounds at a stated level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub level: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// A discounted-mean price estimate, optionally with confidence bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceEstimate {
    pub price: f64,
    pub interval: Option<ConfidenceInterval>,
}

impl PriceEstimate {
    pub fn with_interval(self, interval: ConfidenceInterval) -> Self {
        PriceEstimate {
            price: self.price,
            interval: Some(interval),
        }
    }
}

fn make_draws(cfg: &McConfig) -> Vec<f64> {
    let mut source = NormalSource::new(cfg.seed);
    match cfg.sampling {
        Sampling::Standard => source.draw(cfg.params.iterations),
        Sampling::Antithetic => source.draw_antithetic(cfg.params.iterations),
    }
}

fn check_finite_price(price: f64) -> PricingResult<f64> {
    if !price.is_finite() {
        return Err(PricingError::NumericalInstability {
            method: "Monte Carlo".to_string(),
            reason: format!("Price estimate is not finite: {}", price),
        });
    }
    Ok(price)
}

/// Price a European option by Monte Carlo simulation.
///
/// Draws N standard normals (or N/2 antithetic pairs), maps them through the
/// exact GBM terminal solution, evaluates the payoff per draw, and returns the
/// discounted mean. The estimate carries no confidence bounds; see
/// [`confidence_interval`](crate::mc::confidence::confidence_interval) or
/// [`price_with_confidence`](crate::mc::confidence::price_with_confidence).
///
/// # Errors
///
/// - invalid parameters (non-positive or non-finite inputs)
/// - antithetic sampling with fewer than 2 iterations
/// - a non-finite final estimate (extreme sigma/T overflowing `exp`)
pub fn mc_price(cfg: &McConfig) -> PricingResult<PriceEstimate> {
    cfg.validate()?;

    let p = &cfg.params;
    let gbm = Gbm::new(p.s0, p.rate, p.sigma);
    let option_type = cfg.option_type;
    let draws = make_draws(cfg);

    // Chunk totals are collected in input order and combined sequentially so
    // the floating-point sum is independent of thread scheduling.
    let chunk_sums: Vec<f64> = draws
        .par_chunks(REDUCTION_CHUNK)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&z| option_type.payoff(gbm.terminal_price(p.maturity, z), p.strike))
                .sum::<f64>()
        })
        .collect();
    let sum_payoff: f64 = chunk_sums.iter().sum();

    let price = p.discount_factor() * (sum_payoff / draws.len() as f64);

    Ok(PriceEstimate {
        price: check_finite_price(price)?,
        interval: None,
    })
}

/// Price a European option and retain the simulated batch.
///
/// Identical estimate to [`mc_price`] for the same configuration and seed;
/// additionally returns the ordered terminal prices and payoffs for external
/// visualization or analysis.
pub fn mc_price_with_batch(cfg: &McConfig) -> PricingResult<(PriceEstimate, SimulationBatch)> {
    cfg.validate()?;

    let p = &cfg.params;
    let gbm = Gbm::new(p.s0, p.rate, p.sigma);
    let option_type = cfg.option_type;
    let draws = make_draws(cfg);

    let terminal_prices = gbm.terminal_prices(p.maturity, &draws);
    let payoffs: Vec<f64> = terminal_prices
        .par_iter()
        .map(|&s_t| option_type.payoff(s_t, p.strike))
        .collect();

    let chunk_sums: Vec<f64> = payoffs
        .par_chunks(REDUCTION_CHUNK)
        .map(|chunk| chunk.iter().sum::<f64>())
        .collect();
    let sum_payoff: f64 = chunk_sums.iter().sum();

    let price = p.discount_factor() * (sum_payoff / payoffs.len() as f64);

    let estimate = PriceEstimate {
        price: check_finite_price(price)?,
        interval: None,
    };
    let batch = SimulationBatch {
        terminal_prices,
        payoffs,
    };
    Ok((estimate, batch))
}

/// Standard Monte Carlo call price.
pub fn price_call_standard(params: &OptionParameters, seed: u64) -> PricingResult<PriceEstimate> {
    mc_price(&McConfig {
        params: *params,
        option_type: OptionType::Call,
        sampling: Sampling::Standard,
        seed,
    })
}

/// Standard Monte Carlo put price.
pub fn price_put_standard(params: &OptionParameters, seed: u64) -> PricingResult<PriceEstimate> {
    mc_price(&McConfig {
        params: *params,
        option_type: OptionType::Put,
        sampling: Sampling::Standard,
        seed,
    })
}

/// Antithetic-variates Monte Carlo call price.
pub fn price_call_antithetic(params: &OptionParameters, seed: u64) -> PricingResult<PriceEstimate> {
    mc_price(&McConfig {
        params: *params,
        option_type: OptionType::Call,
        sampling: Sampling::Antithetic,
        seed,
    })
}

/// Antithetic-variates Monte Carlo put price.
pub fn price_put_antithetic(params: &OptionParameters, seed: u64) -> PricingResult<PriceEstimate> {
    mc_price(&McConfig {
        params: *params,
        option_type: OptionType::Put,
        sampling: Sampling::Antithetic,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_reproducible() {
        let cfg = McConfig {
            sampling: Sampling::Antithetic,
            ..Default::default()
        };

        let first = mc_price(&cfg).expect("valid configuration");
        let second = mc_price(&cfg).expect("valid configuration");
        assert_eq!(first.price, second.price);
    }

    #[test]
    fn test_batch_estimate_matches_scalar_path() {
        let cfg = McConfig {
            params: OptionParameters {
                iterations: 10_000,
                ..Default::default()
            },
            ..Default::default()
        };

        let scalar = mc_price(&cfg).expect("valid configuration");
        let (estimate, batch) = mc_price_with_batch(&cfg).expect("valid configuration");

        assert_eq!(estimate.price, scalar.price);
        assert_eq!(batch.len(), 10_000);
        assert_eq!(batch.terminal_prices.len(), batch.payoffs.len());
    }

    #[test]
    fn test_antithetic_batch_floors_odd_iterations() {
        let cfg = McConfig {
            params: OptionParameters {
                iterations: 1001,
                ..Default::default()
            },
            sampling: Sampling::Antithetic,
            ..Default::default()
        };

        let (_, batch) = mc_price_with_batch(&cfg).expect("valid configuration");
        assert_eq!(batch.len(), 1000);
    }

    #[test]
    fn test_antithetic_requires_two_iterations() {
        let cfg = McConfig {
            params: OptionParameters {
                iterations: 1,
                ..Default::default()
            },
            sampling: Sampling::Antithetic,
            ..Default::default()
        };

        match mc_price(&cfg) {
            Err(PricingError::InsufficientSamples {
                required, actual, ..
            }) => {
                assert_eq!(required, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected InsufficientSamples, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_parameters_fail_before_simulation() {
        let cfg = McConfig {
            params: OptionParameters {
                sigma: -0.2,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(mc_price(&cfg).is_err());
    }

    #[test]
    fn test_deep_in_the_money_call_near_forward_parity() {
        // For a tiny strike the call is worth ~ S0 - E*exp(-rf T)
        let params = OptionParameters {
            strike: 1e-6,
            iterations: 50_000,
            ..Default::default()
        };
        let cfg = McConfig {
            params,
            ..Default::default()
        };

        let estimate = mc_price(&cfg).expect("valid configuration");
        let expected = params.s0 - params.strike * params.discount_factor();
        let rel_error = (estimate.price - expected).abs() / expected;
        assert!(rel_error < 0.02, "relative error too large: {}", rel_error);
    }

    #[test]
    fn test_prices_non_negative() {
        for seed in 0..5 {
            let cfg = McConfig {
                params: OptionParameters {
                    iterations: 5_000,
                    ..Default::default()
                },
                option_type: OptionType::Put,
                seed,
                ..Default::default()
            };
            let estimate = mc_price(&cfg).expect("valid configuration");
            assert!(estimate.price >= 0.0);
        }
    }

    #[test]
    fn test_confidence_interval_helpers() {
        let interval = ConfidenceInterval {
            lower: 9.5,
            upper: 10.5,
            level: 0.95,
        };
        assert!((interval.width() - 1.0).abs() < 1e-12);
        assert!(interval.contains(10.0));
        assert!(!interval.contains(11.0));

        let estimate = PriceEstimate {
            price: 10.0,
            interval: None,
        };
        let with_bounds = estimate.with_interval(interval);
        assert_eq!(with_bounds.interval, Some(interval));
    }
}
