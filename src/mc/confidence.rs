// src/mc/confidence.rs
//! Confidence-interval estimation via repeated sub-sampling.
//!
//! The total iteration budget N is partitioned into `num_subsamples` equal
//! independent sub-runs of N / `num_subsamples` iterations (integer division;
//! the remainder is dropped, a documented approximation). Each sub-run is a
//! standard Monte Carlo simulation of the *same* option type as the point
//! estimate, on its own derived seed stream. The Bessel-corrected sample
//! standard deviation of the sub-estimates, divided by sqrt(num_subsamples),
//! gives the standard error of the mean, and the bounds are
//! `point_estimate ± z * se` with `z = Φ⁻¹((1 + level) / 2)`.
//!
//! # Cost
//!
//! This runs `num_subsamples` additional full simulations of
//! `N / num_subsamples` iterations each - O(num_subsamples * subsample_size)
//! work on top of the point estimate. Sub-runs execute in parallel.

use crate::error::{validation::*, PricingError, PricingResult};
use crate::math_utils::{inverse_norm_cdf, sample_std};
use crate::mc::engine::{mc_price, ConfidenceInterval, McConfig, PriceEstimate, Sampling};
use crate::params::OptionParameters;
use crate::rng::derive_stream_seed;
use rayon::prelude::*;

/// Default two-sided confidence level.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default number of sub-sampled simulations.
pub const DEFAULT_SUBSAMPLES: usize = 30;

/// Estimate confidence bounds for a Monte Carlo price by sub-sampling.
///
/// `point_estimate` is the price being bounded; the sub-runs re-simulate the
/// option type named in `cfg`, so put estimates are bounded by put sub-runs
/// and call estimates by call sub-runs.
///
/// # Errors
///
/// - `level` outside (0, 1)
/// - `num_subsamples < 2` (the sample standard deviation needs two points)
/// - `iterations < num_subsamples` (every sub-run needs at least one draw)
pub fn confidence_interval(
    cfg: &McConfig,
    point_estimate: f64,
    level: f64,
    num_subsamples: usize,
) -> PricingResult<ConfidenceInterval> {
    cfg.validate()?;
    validate_unit_interval("confidence level", level)?;

    if num_subsamples < 2 {
        return Err(PricingError::InsufficientSamples {
            method: "confidence sub-sampling".to_string(),
            required: 2,
            actual: num_subsamples,
        });
    }
    if cfg.params.iterations < num_subsamples {
        return Err(PricingError::InsufficientSamples {
            method: "confidence sub-sampling".to_string(),
            required: num_subsamples,
            actual: cfg.params.iterations,
        });
    }

    // Remainder iterations beyond num_subsamples * subsample_size are dropped.
    let subsample_size = cfg.params.iterations / num_subsamples;

    let sub_estimates: Vec<f64> = (0..num_subsamples)
        .into_par_iter()
        .map(|j| {
            let sub_cfg = McConfig {
                params: OptionParameters {
                    iterations: subsample_size,
                    ..cfg.params
                },
                option_type: cfg.option_type,
                sampling: Sampling::Standard,
                seed: derive_stream_seed(cfg.seed, 1 + j as u64),
            };
            mc_price(&sub_cfg).map(|estimate| estimate.price)
        })
        .collect::<PricingResult<Vec<f64>>>()?;

    let std_error = sample_std(&sub_estimates) / (num_subsamples as f64).sqrt();
    let z = inverse_norm_cdf((1.0 + level) / 2.0);

    Ok(ConfidenceInterval {
        lower: point_estimate - z * std_error,
        upper: point_estimate + z * std_error,
        level,
    })
}

/// Price an option and attach confidence bounds in one call.
pub fn price_with_confidence(
    cfg: &McConfig,
    level: f64,
    num_subsamples: usize,
) -> PricingResult<PriceEstimate> {
    let estimate = mc_price(cfg)?;
    let interval = confidence_interval(cfg, estimate.price, level, num_subsamples)?;
    Ok(estimate.with_interval(interval))
}
