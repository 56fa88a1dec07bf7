//! Stress testing: multiplicative shocks on the baseline balance sheet

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// A named multiplicative shock on assets and liabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressScenario {
    pub name: String,
    pub asset_factor: f64,
    pub liability_factor: f64,
}

impl StressScenario {
    pub fn new(name: &str, asset_factor: f64, liability_factor: f64) -> Self {
        Self {
            name: name.to_string(),
            asset_factor,
            liability_factor,
        }
    }

    /// Fixed scenario set, always led by the unshocked Base scenario
    pub fn default_set() -> Vec<Self> {
        vec![
            Self::new("Base", 1.0, 1.0),
            Self::new("Equity -30%", 0.7, 1.1),
            Self::new("Interest Rate +200bps", 0.95, 0.9),
            Self::new("Credit Spread +100bps", 0.97, 1.05),
            Self::new("Insurance Loss +50%", 1.0, 1.5),
        ]
    }
}

/// Impacts of one scenario, all deltas from baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressResult {
    pub scenario: String,
    pub asset_impact: f64,
    pub liability_impact: f64,
    pub capital_impact: f64,
    /// Percentage change in capital relative to baseline capital
    pub rbc_ratio_impact: f64,
}

/// Apply every scenario to the baseline balance sheet
///
/// Baseline capital must be non-zero; the ratio impact divides by it.
pub fn run_scenarios(
    scenarios: &[StressScenario],
    base_assets: f64,
    base_liabilities: f64,
) -> ModelResult<Vec<StressResult>> {
    let base_capital = base_assets - base_liabilities;
    if base_capital == 0.0 {
        return Err(ModelError::div_zero(
            "stress_test",
            "baseline capital is zero",
        ));
    }

    let results = scenarios
        .iter()
        .map(|scenario| {
            let stressed_assets = base_assets * scenario.asset_factor;
            let stressed_liabilities = base_liabilities * scenario.liability_factor;
            let stressed_capital = stressed_assets - stressed_liabilities;
            StressResult {
                scenario: scenario.name.clone(),
                asset_impact: stressed_assets - base_assets,
                liability_impact: stressed_liabilities - base_liabilities,
                capital_impact: stressed_capital - base_capital,
                rbc_ratio_impact: (stressed_capital / base_capital - 1.0) * 100.0,
            }
        })
        .collect();

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_scenario_impacts_are_exactly_zero() {
        for (assets, liabilities) in [
            (1_100_000.0, 550_000.0),
            (0.01, 0.005),
            (123_456.78, 98_765.43),
        ] {
            let results = run_scenarios(&StressScenario::default_set(), assets, liabilities).unwrap();
            let base = &results[0];
            assert_eq!(base.scenario, "Base");
            assert_eq!(base.asset_impact, 0.0);
            assert_eq!(base.liability_impact, 0.0);
            assert_eq!(base.capital_impact, 0.0);
            assert_eq!(base.rbc_ratio_impact, 0.0);
        }
    }

    #[test]
    fn test_equity_shock_impacts() {
        let results = run_scenarios(&StressScenario::default_set(), 1_000_000.0, 500_000.0).unwrap();
        let equity = &results[1];
        assert_eq!(equity.scenario, "Equity -30%");
        assert_relative_eq!(equity.asset_impact, -300_000.0, epsilon = 1e-9);
        assert_relative_eq!(equity.liability_impact, 50_000.0, epsilon = 1e-9);
        assert_relative_eq!(equity.capital_impact, -350_000.0, epsilon = 1e-9);
        // Capital falls from 500,000 to 150,000: -70%
        assert_relative_eq!(equity.rbc_ratio_impact, -70.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_baseline_capital_is_error() {
        let err = run_scenarios(&StressScenario::default_set(), 500_000.0, 500_000.0).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ModelError::DivisionByZero { .. }
        ));
    }

    #[test]
    fn test_scenario_set_is_complete() {
        let set = StressScenario::default_set();
        assert_eq!(set.len(), 5);
        assert_eq!(set[0].name, "Base");
        assert_eq!(set[0].asset_factor, 1.0);
        assert_eq!(set[0].liability_factor, 1.0);
    }
}
