// demos/demo.rs
use optionmc::analytics::bs_analytic;
use optionmc::math_utils::Timer;
use optionmc::mc::confidence::{price_with_confidence, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SUBSAMPLES};
use optionmc::mc::engine::{mc_price_with_batch, price_put_antithetic, McConfig, Sampling};
use optionmc::output;
use optionmc::{OptionParameters, OptionType};

fn main() {
    println!("Running optionmc Monte Carlo Demo\n");

    let params = OptionParameters {
        s0: 100.0,
        strike: 100.0,
        maturity: 1.0,
        rate: 0.05,
        sigma: 0.2,
        iterations: 100_000,
    };
    let seed = 42;

    let (analytic_call, analytic_put) =
        bs_analytic::bs_prices(&params).expect("valid parameters");

    // --- European Call Pricing ---
    println!("--- European Call Pricing ---");

    let call_cfg = McConfig {
        params,
        option_type: OptionType::Call,
        sampling: Sampling::Antithetic,
        seed,
    };

    let mut timer = Timer::new();
    timer.start();
    let call_estimate =
        price_with_confidence(&call_cfg, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_SUBSAMPLES)
            .expect("valid configuration");
    let call_time_ms = timer.elapsed_ms();

    let call_metrics = output::performance_metrics(call_estimate.price, analytic_call, call_time_ms);
    let interval = call_estimate.interval.expect("interval attached");

    println!("MC Price (Antithetic Call): {:.4} ({:.1} ms)", call_estimate.price, call_time_ms);
    println!(
        "95% Confidence Interval: [{:.4}, {:.4}]",
        interval.lower, interval.upper
    );
    println!("Analytic Price (Call): {:.4}", analytic_call);
    println!("Absolute Error: {:.5}", call_metrics.absolute_error);
    println!("Relative Error: {:.5}\n", call_metrics.relative_error);

    // --- European Put Pricing ---
    println!("--- European Put Pricing ---");

    timer.start();
    let put_estimate = price_put_antithetic(&params, seed).expect("valid configuration");
    let put_time_ms = timer.elapsed_ms();
    let put_metrics = output::performance_metrics(put_estimate.price, analytic_put, put_time_ms);

    println!("MC Price (Antithetic Put): {:.4} ({:.1} ms)", put_estimate.price, put_time_ms);
    println!("Analytic Price (Put): {:.4}", analytic_put);
    println!("Absolute Error: {:.5}", put_metrics.absolute_error);
    println!("Relative Error: {:.5}\n", put_metrics.relative_error);

    // --- Batch Retention and CSV Output ---
    let (_, batch) = mc_price_with_batch(&call_cfg).expect("valid configuration");

    std::fs::create_dir_all("results").expect("could not create results directory");

    let batch_csv = "results/batch.csv";
    match output::write_batch_to_csv(batch_csv, &batch) {
        Ok(_) => println!("Batch data written to {}", batch_csv),
        Err(e) => eprintln!("Error writing batch data: {}", e),
    }

    let mc_call_str = format!("{:.6}", call_estimate.price);
    let analytic_call_str = format!("{:.6}", analytic_call);
    let ci_lower_str = format!("{:.6}", interval.lower);
    let ci_upper_str = format!("{:.6}", interval.upper);
    let call_rel_error_str = format!("{:.6}", call_metrics.relative_error);
    let mc_put_str = format!("{:.6}", put_estimate.price);
    let analytic_put_str = format!("{:.6}", analytic_put);
    let put_rel_error_str = format!("{:.6}", put_metrics.relative_error);

    let summary_data = vec![
        ("metric", "value"),
        ("mc_call_price", mc_call_str.as_str()),
        ("analytic_call_price", analytic_call_str.as_str()),
        ("call_ci_lower", ci_lower_str.as_str()),
        ("call_ci_upper", ci_upper_str.as_str()),
        ("call_rel_error", call_rel_error_str.as_str()),
        ("mc_put_price", mc_put_str.as_str()),
        ("analytic_put_price", analytic_put_str.as_str()),
        ("put_rel_error", put_rel_error_str.as_str()),
    ];

    let summary_csv = "results/summary.csv";
    match output::write_summary_to_csv(summary_csv, &summary_data) {
        Ok(_) => println!("Summary data written to {}", summary_csv),
        Err(e) => eprintln!("Error writing summary data: {}", e),
    }
}
