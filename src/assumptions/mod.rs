//! Model assumptions: scalar parameters and fixed calibration tables

mod calibration;
pub mod loader;

pub use calibration::{
    AssetProfile, DashboardTargets, RbcCoefficients, RiskFactor, COVERAGE_UNITS,
};

use crate::error::{ModelError, ModelResult};
use crate::stress::StressScenario;
use std::path::Path;

/// Named scalar parameters driving the model
///
/// Immutable once constructed; every downstream component reads from this
/// set and none writes back.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    /// Opening asset market value
    pub initial_assets: f64,
    /// Annual discount rate for BEL
    pub discount_rate: f64,
    /// Risk-free reference rate
    pub risk_free_rate: f64,
    /// Credit spread over risk-free
    pub credit_spread: f64,
    /// Liability duration in years
    pub liability_duration: f64,
    /// Target assets / liabilities ratio
    pub target_funding_ratio: f64,
    /// IFRS17 risk adjustment cost-of-capital rate
    pub risk_adjustment_coc: f64,
    /// RBC2 target ratio (percent)
    pub rbc_target_ratio: f64,
    /// Acquisition costs offset in the CSM
    pub acquisition_costs: f64,
    /// Number of coverage periods for the liability run-off
    pub coverage_period: usize,
    /// Annual premium volume (operational risk driver)
    pub annual_premium: f64,
    /// Expected claim cash flow per coverage period
    pub claim_cash_flow: f64,
}

impl ModelParameters {
    /// Reference parameter set matching the base ALM model
    pub fn base_case() -> Self {
        Self {
            initial_assets: 1_000_000.0,
            discount_rate: 0.03,
            risk_free_rate: 0.02,
            credit_spread: 0.01,
            liability_duration: 10.0,
            target_funding_ratio: 1.10,
            risk_adjustment_coc: 0.06,
            rbc_target_ratio: 150.0,
            acquisition_costs: 50_000.0,
            coverage_period: 12,
            annual_premium: 50_000.0,
            claim_cash_flow: 50_000.0,
        }
    }

    /// Reject malformed parameters before any computation runs
    pub fn validate(&self) -> ModelResult<()> {
        let non_negative = [
            ("initial_assets", self.initial_assets),
            ("discount_rate", self.discount_rate),
            ("risk_free_rate", self.risk_free_rate),
            ("credit_spread", self.credit_spread),
            ("risk_adjustment_coc", self.risk_adjustment_coc),
            ("acquisition_costs", self.acquisition_costs),
            ("annual_premium", self.annual_premium),
            ("claim_cash_flow", self.claim_cash_flow),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::input(name, value, "must be a non-negative number"));
            }
        }
        if self.liability_duration <= 0.0 {
            return Err(ModelError::input(
                "liability_duration",
                self.liability_duration,
                "must be positive",
            ));
        }
        if self.target_funding_ratio <= 0.0 {
            return Err(ModelError::input(
                "target_funding_ratio",
                self.target_funding_ratio,
                "must be positive",
            ));
        }
        if self.rbc_target_ratio <= 0.0 {
            return Err(ModelError::input(
                "rbc_target_ratio",
                self.rbc_target_ratio,
                "must be positive",
            ));
        }
        if self.coverage_period == 0 {
            return Err(ModelError::input(
                "coverage_period",
                0.0,
                "must be at least one period",
            ));
        }
        Ok(())
    }

    /// Expected claim cash flows over the coverage period
    pub fn claim_cash_flows(&self) -> Vec<f64> {
        vec![self.claim_cash_flow; self.coverage_period]
    }

    /// Parameter name/value pairs in reporting order
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Initial Assets", self.initial_assets),
            ("Discount Rate", self.discount_rate),
            ("Risk-Free Rate", self.risk_free_rate),
            ("Credit Spread", self.credit_spread),
            ("Liability Duration", self.liability_duration),
            ("Target Funding Ratio", self.target_funding_ratio),
            ("IFRS17 Risk Adjustment CoC", self.risk_adjustment_coc),
            ("RBC2 Target Ratio", self.rbc_target_ratio),
            ("Acquisition Costs", self.acquisition_costs),
            ("Coverage Period", self.coverage_period as f64),
            ("Annual Premium", self.annual_premium),
            ("Claim Cash Flow", self.claim_cash_flow),
        ]
    }
}

/// Container for all model assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub params: ModelParameters,
    pub rbc: RbcCoefficients,
    pub asset_profile: AssetProfile,
    pub risk_factors: Vec<RiskFactor>,
    pub stress_scenarios: Vec<StressScenario>,
    pub targets: DashboardTargets,
}

impl Assumptions {
    /// Create assumptions with in-memory defaults matching the reference model
    pub fn base_case() -> Self {
        Self {
            params: ModelParameters::base_case(),
            rbc: RbcCoefficients::default(),
            asset_profile: AssetProfile::default(),
            risk_factors: RiskFactor::default_set(),
            stress_scenarios: StressScenario::default_set(),
            targets: DashboardTargets::default(),
        }
    }

    /// Load scalar parameters from a CSV file, defaulting the calibration tables
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            params: loader::load_parameters(path)?,
            ..Self::base_case()
        })
    }

    /// Validate every input table before the pipeline runs
    pub fn validate(&self) -> ModelResult<()> {
        self.params.validate()?;
        self.rbc.validate()?;
        for factor in &self.risk_factors {
            factor.validate()?;
        }
        Ok(())
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::base_case()
    }
}
