//! CSV-based parameter loader
//!
//! Loads the scalar model parameters from a Parameter,Value CSV table so
//! calibrations can be swapped without code changes.

use super::ModelParameters;
use std::error::Error;
use std::fs::File;
use std::path::Path;

/// Load model parameters from a Parameter,Value CSV file
///
/// Unknown parameter names are rejected; missing parameters keep their
/// base-case values.
pub fn load_parameters(path: &Path) -> Result<ModelParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    load_parameters_from_reader(file)
}

/// Load model parameters from any reader (useful for testing)
pub fn load_parameters_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<ModelParameters, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut params = ModelParameters::base_case();

    for result in csv_reader.records() {
        let record = result?;
        let name = record[0].trim();
        let value: f64 = record[1].trim().parse()?;

        match name {
            "Initial Assets" => params.initial_assets = value,
            "Discount Rate" => params.discount_rate = value,
            "Risk-Free Rate" => params.risk_free_rate = value,
            "Credit Spread" => params.credit_spread = value,
            "Liability Duration" => params.liability_duration = value,
            "Target Funding Ratio" => params.target_funding_ratio = value,
            "IFRS17 Risk Adjustment CoC" => params.risk_adjustment_coc = value,
            "RBC2 Target Ratio" => params.rbc_target_ratio = value,
            "Acquisition Costs" => params.acquisition_costs = value,
            "Coverage Period" => params.coverage_period = value as usize,
            "Annual Premium" => params.annual_premium = value,
            "Claim Cash Flow" => params.claim_cash_flow = value,
            other => return Err(format!("unknown parameter: {}", other).into()),
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_parameters_from_csv() {
        let csv = "Parameter,Value\n\
                   Discount Rate,0.04\n\
                   Coverage Period,24\n";
        let params = load_parameters_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(params.discount_rate, 0.04);
        assert_eq!(params.coverage_period, 24);
        // Untouched parameters keep base-case values
        assert_eq!(params.acquisition_costs, 50_000.0);
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let csv = "Parameter,Value\nLapse Rate,0.05\n";
        assert!(load_parameters_from_reader(csv.as_bytes()).is_err());
    }
}
