//! Discount-rate sensitivity grid
//!
//! Runs the full model once per candidate discount rate in parallel and
//! reports how the capital position moves. Each run is an independent
//! sequential pipeline; parallelism is across runs only.

use alm_system::{Assumptions, ModelRunner, TimeSeries};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Serialize)]
struct SensitivityPoint {
    discount_rate: f64,
    mean_bel: f64,
    mean_total_provisions: f64,
    required_capital: f64,
    available_capital: f64,
    rbc_ratio: f64,
    all_green: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let history = TimeSeries::monthly(
        2023,
        1,
        &[
            1_000_000.0, 1_020_000.0, 1_040_000.0, 1_065_000.0, 1_080_000.0, 1_100_000.0,
            1_120_000.0, 1_140_000.0, 1_160_000.0, 1_180_000.0, 1_200_000.0, 1_220_000.0,
        ],
    )?;

    // 1% to 6% in 25bps steps
    let rates: Vec<f64> = (4..=24).map(|i| i as f64 * 0.0025).collect();

    println!("Running {} discount-rate scenarios...", rates.len());
    let start = Instant::now();

    let points: Vec<SensitivityPoint> = rates
        .par_iter()
        .map(|&rate| {
            let mut assumptions = Assumptions::base_case();
            assumptions.params.discount_rate = rate;
            let runner = ModelRunner::with_assumptions(assumptions);
            let results = runner.run(&history, 12)?;

            Ok(SensitivityPoint {
                discount_rate: rate,
                mean_bel: results.provisions.mean_bel(),
                mean_total_provisions: results.provisions.mean_total(),
                required_capital: results.capital.required_capital,
                available_capital: results.capital.available_capital,
                rbc_ratio: results.capital.rbc_ratio,
                all_green: results.dashboard.all_green(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    println!("Completed in {:?}\n", start.elapsed());

    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>10}",
        "Rate", "Mean BEL", "Required", "Available", "RBC2 %"
    );
    println!("{}", "-".repeat(66));
    for point in &points {
        println!(
            "{:>7.2}% {:>14.2} {:>14.2} {:>14.2} {:>10.1}",
            point.discount_rate * 100.0,
            point.mean_bel,
            point.required_capital,
            point.available_capital,
            point.rbc_ratio,
        );
    }

    println!("\n{}", serde_json::to_string(&points)?);

    Ok(())
}
