// scripts/benchmark.rs
use optionmc::analytics::bs_analytic;
use optionmc::math_utils::Timer;
use optionmc::mc::engine::{mc_price, McConfig, Sampling};
use optionmc::{OptionParameters, OptionType};
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        let rust_version = Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string());

        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version,
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    iterations: usize,
    time_ms: f64,
    throughput_draws_per_sec: f64,
    value: f64,
    analytic_value: f64,
    relative_error: f64,
}

fn run_pricing_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let analytic =
        bs_analytic::bs_call_price(&OptionParameters::default()).expect("valid parameters");

    let iteration_ladder = [10_000, 100_000, 1_000_000];
    let methods = [
        (Sampling::Standard, "Standard"),
        (Sampling::Antithetic, "Antithetic"),
    ];

    for &iterations in &iteration_ladder {
        for &(sampling, method_name) in &methods {
            println!("Running {} benchmark with {} iterations...", method_name, iterations);

            let cfg = McConfig {
                params: OptionParameters {
                    iterations,
                    ..Default::default()
                },
                option_type: OptionType::Call,
                sampling,
                seed: 42,
            };

            let mut timer = Timer::new();
            timer.start();
            let estimate = mc_price(&cfg).expect("valid configuration");
            let time_ms = timer.elapsed_ms();

            results.push(BenchmarkResult {
                name: format!("European Call {} ({}k draws)", method_name, iterations / 1000),
                iterations,
                time_ms,
                throughput_draws_per_sec: iterations as f64 / (time_ms / 1000.0),
                value: estimate.price,
                analytic_value: analytic,
                relative_error: (estimate.price - analytic).abs() / analytic,
            });
        }
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) {
    let mut file = File::create(filename).expect("Could not create CSV file");

    writeln!(file, "# System Information").unwrap();
    writeln!(file, "# OS: {}", system_info.os).unwrap();
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores).unwrap();
    writeln!(file, "# Rust Version: {}", system_info.rust_version).unwrap();
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags).unwrap();
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    writeln!(
        file,
        "Benchmark,Iterations,Time_ms,Throughput_draws_per_sec,Value,Analytic_Value,Relative_Error"
    )
    .unwrap();

    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6},{:.6},{:.6}",
            result.name,
            result.iterations,
            result.time_ms,
            result.throughput_draws_per_sec,
            result.value,
            result.analytic_value,
            result.relative_error
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    println!("optionmc Benchmark Suite");
    println!("========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let results = run_pricing_benchmarks();

    println!("\n{:=<100}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<100}", "");
    println!(
        "{:<40} {:>10} {:>10} {:>15} {:>9} {:>12}",
        "Benchmark", "Draws", "Time (ms)", "Throughput", "Value", "Rel Error"
    );
    println!("{:-<100}", "");

    for result in &results {
        println!(
            "{:<40} {:>10} {:>10.2} {:>15.0} {:>9.4} {:>11.3}%",
            result.name,
            result.iterations,
            result.time_ms,
            result.throughput_draws_per_sec,
            result.value,
            result.relative_error * 100.0
        );
    }

    println!("{:=<100}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&results, &system_info, &filename);

    println!("\nBenchmark complete!");
    println!("To reproduce: cargo run --bin benchmark --release");
}
