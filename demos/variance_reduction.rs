// demos/variance_reduction.rs
//
// Repeats standard and antithetic pricing runs at a fixed draw budget and
// compares the spread of the two estimators around the analytical price.
use optionmc::analytics::bs_analytic;
use optionmc::math_utils::sample_std;
use optionmc::mc::engine::{price_call_antithetic, price_call_standard};
use optionmc::OptionParameters;

fn main() {
    println!("Variance Reduction Study: Standard vs Antithetic Variates\n");

    let params = OptionParameters {
        iterations: 50_000,
        ..Default::default()
    };
    let repetitions = 50;

    let analytic = bs_analytic::bs_call_price(&params).expect("valid parameters");
    println!("Analytic call price: {:.4}", analytic);
    println!(
        "Running {} repetitions at {} iterations each...\n",
        repetitions, params.iterations
    );

    let mut standard_prices = Vec::with_capacity(repetitions);
    let mut antithetic_prices = Vec::with_capacity(repetitions);
    for seed in 0..repetitions as u64 {
        standard_prices.push(
            price_call_standard(&params, seed)
                .expect("valid configuration")
                .price,
        );
        antithetic_prices.push(
            price_call_antithetic(&params, seed)
                .expect("valid configuration")
                .price,
        );
    }

    let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
    let standard_std = sample_std(&standard_prices);
    let antithetic_std = sample_std(&antithetic_prices);

    println!("{:<12} {:>10} {:>12}", "Method", "Mean", "Sample Std");
    println!("{:-<36}", "");
    println!(
        "{:<12} {:>10.4} {:>12.5}",
        "Standard",
        mean(&standard_prices),
        standard_std
    );
    println!(
        "{:<12} {:>10.4} {:>12.5}",
        "Antithetic",
        mean(&antithetic_prices),
        antithetic_std
    );

    let variance_ratio = (standard_std * standard_std) / (antithetic_std * antithetic_std);
    println!("\nVariance reduction factor: {:.2}x", variance_ratio);
}
