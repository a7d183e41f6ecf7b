//! # optionmc: Monte Carlo European Option Pricing
//!
//! A Rust library for pricing European options by Monte Carlo simulation under
//! geometric Brownian motion, validated against the closed-form Black-Scholes
//! solution.
//!
//! ## Key Features
//!
//! - **Parallel simulation**: per-draw work runs on Rayon with a
//!   scheduling-independent reduction
//! - **Variance Reduction**: antithetic variates with the same unbiased mean
//! - **Error Analysis**: sub-sampled confidence intervals for any estimate
//! - **Ground Truth**: analytical Black-Scholes call/put prices
//! - **Reproducibility**: every simulation takes an explicit seed; no global
//!   RNG state
//!
//! ## Quick Start
//!
//! ```rust
//! use optionmc::analytics::bs_analytic;
//! use optionmc::mc::engine::{mc_price, McConfig, Sampling};
//! use optionmc::OptionType;
//!
//! // At-the-money European call, default textbook parameters
//! let cfg = McConfig {
//!     option_type: OptionType::Call,
//!     sampling: Sampling::Antithetic,
//!     seed: 42,
//!     ..Default::default()
//! };
//!
//! let estimate = mc_price(&cfg).expect("valid configuration");
//! let analytic = bs_analytic::bs_call_price(&cfg.params).expect("valid parameters");
//! println!("MC price: {:.4}, Black-Scholes: {:.4}", estimate.price, analytic);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The simulated terminal price follows the exact GBM solution
//! `S_T = S_0 exp((rf - σ²/2)T + σ√T Z)`; the option price is the discounted
//! mean payoff over N draws. Antithetic sampling pairs each Z with -Z,
//! trading no bias for lower estimator variance.

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod output;
pub mod params;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{PricingError, PricingResult};
pub use mc::engine::{ConfidenceInterval, McConfig, PriceEstimate, Sampling, SimulationBatch};
pub use mc::payoffs::OptionType;
pub use params::{Moneyness, OptionParameters};
