// src/error.rs
use std::fmt;

/// Custom error types for the optionmc library
#[derive(Debug, Clone)]
pub enum PricingError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Too few samples for the requested estimation method
    InsufficientSamples {
        method: String,
        required: usize,
        actual: usize,
    },

    /// Black-Scholes d1/d2 are undefined because sigma * sqrt(T) vanishes
    DegenerateModel { sigma: f64, maturity: f64 },

    /// Numerical instability in a simulation result
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PricingError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PricingError::InsufficientSamples {
                method,
                required,
                actual,
            } => {
                write!(
                    f,
                    "Insufficient samples for {}: requires at least {}, got {}",
                    method, required, actual
                )
            }
            PricingError::DegenerateModel { sigma, maturity } => {
                write!(
                    f,
                    "Degenerate model: sigma * sqrt(T) = 0 (sigma = {}, T = {}), d1/d2 undefined",
                    sigma, maturity
                )
            }
            PricingError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Result type alias for optionmc operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is positive (rejects NaN as well)
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a probability-like value lies strictly inside (0, 1)
    pub fn validate_unit_interval(name: &str, value: f64) -> PricingResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 || value >= 1.0 {
            Err(PricingError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must lie strictly between 0 and 1".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate iteration count
    pub fn validate_iterations(iterations: usize) -> PricingResult<()> {
        if iterations == 0 {
            Err(PricingError::InvalidConfiguration {
                field: "iterations".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if iterations > 1_000_000_000 {
            Err(PricingError::InvalidConfiguration {
                field: "iterations".to_string(),
                reason: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
