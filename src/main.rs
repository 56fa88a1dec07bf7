//! ALM System CLI
//!
//! Runs the full pipeline over the reference asset history and writes the
//! seven report tables as CSV files.

use alm_system::{Assumptions, ModelRunner, TimeSeries};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "alm_system", about = "Asset-liability model with IFRS17 and RBC2")]
struct Args {
    /// Forecast horizon in months beyond the history
    #[arg(long, default_value_t = 12)]
    horizon: usize,

    /// Optional Parameter,Value CSV overriding the base-case parameters
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Directory for the CSV report tables
    #[arg(long, default_value = "alm_output")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("ALM System v0.1.0");
    println!("=================\n");

    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::from_csv_path(path).map_err(|e| {
            anyhow::anyhow!("loading assumptions from {}: {}", path.display(), e)
        })?,
        None => Assumptions::base_case(),
    };

    // Reference 12-month asset history
    let history = TimeSeries::monthly(
        2023,
        1,
        &[
            1_000_000.0, 1_020_000.0, 1_040_000.0, 1_065_000.0, 1_080_000.0, 1_100_000.0,
            1_120_000.0, 1_140_000.0, 1_160_000.0, 1_180_000.0, 1_200_000.0, 1_220_000.0,
        ],
    )?;

    let runner = ModelRunner::with_assumptions(assumptions);
    let results = runner.run(&history, args.horizon)?;

    // Technical provisions overview
    println!("Technical Provisions ({} periods):", results.provisions.len());
    println!(
        "{:>12} {:>14} {:>14} {:>12} {:>16}",
        "Date", "BEL", "Risk Adj", "CSM", "Total"
    );
    println!("{}", "-".repeat(74));
    for row in results.provisions.rows.iter().take(12) {
        println!(
            "{:>12} {:>14.2} {:>14.2} {:>12.2} {:>16.2}",
            row.date.to_string(),
            row.bel,
            row.risk_adjustment,
            row.csm,
            row.total,
        );
    }
    if results.provisions.len() > 12 {
        println!("... ({} more periods)", results.provisions.len() - 12);
    }

    // Capital position
    let capital = &results.capital;
    println!("\nRBC2 Capital:");
    println!("  C1 (Credit Risk):        ${:>14.2}", capital.components.c1);
    println!("  C2 (Insurance Risk):     ${:>14.2}", capital.components.c2);
    println!("  C3 (Market Risk):        ${:>14.2}", capital.components.c3);
    println!("  C4 (Operational Risk):   ${:>14.2}", capital.components.c4);
    println!("  Total Required Capital:  ${:>14.2}", capital.required_capital);
    println!("  Available Capital:       ${:>14.2}", capital.available_capital);
    println!("  RBC2 Ratio:              {:>15.1}%", capital.rbc_ratio);

    // Stress results
    println!("\nStress Testing:");
    for result in &results.stress {
        println!(
            "  {:<24} capital impact ${:>14.2} ({:>7.2}%)",
            result.scenario, result.capital_impact, result.rbc_ratio_impact,
        );
    }

    // Dashboard
    println!("\nDashboard:");
    for metric in &results.dashboard.metrics {
        println!(
            "  {:<20} current {:>12.2}  target {:>8.2}  [{}]",
            metric.name, metric.current, metric.target, metric.status,
        );
    }

    results.write_csv_tables(&args.output).map_err(|e| {
        anyhow::anyhow!("writing tables to {}: {}", args.output.display(), e)
    })?;
    println!("\nReport tables written to: {}", args.output.display());

    Ok(())
}
