// src/output.rs
//! CSV export and benchmarking helpers for simulation results.
//!
//! The core engine only returns numbers; persisting them is a collaborator
//! concern, and these writers are the plain-CSV form of it.

use crate::mc::engine::SimulationBatch;
use std::fs::File;
use std::io::{self, Write};

/// Write a retained simulation batch as `draw_id,terminal_price,payoff` rows.
pub fn write_batch_to_csv(filename: &str, batch: &SimulationBatch) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "draw_id,terminal_price,payoff")?;
    for (i, (s_t, payoff)) in batch
        .terminal_prices
        .iter()
        .zip(batch.payoffs.iter())
        .enumerate()
    {
        writeln!(file, "{},{},{}", i, s_t, payoff)?;
    }
    Ok(())
}

/// Write key/value summary rows.
pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}

/// Accuracy and timing of a Monte Carlo run against the analytical price.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceMetrics {
    pub absolute_error: f64,
    pub relative_error: f64,
    pub computation_time_ms: f64,
}

pub fn performance_metrics(
    mc_price: f64,
    analytical_price: f64,
    computation_time_ms: f64,
) -> PerformanceMetrics {
    let absolute_error = (mc_price - analytical_price).abs();
    PerformanceMetrics {
        absolute_error,
        relative_error: absolute_error / analytical_price,
        computation_time_ms,
    }
}
