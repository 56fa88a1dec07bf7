//! Fixed calibration tables: RBC coefficients, risk factors, and dashboard targets
//!
//! Regulatory-style constants are modeled as data rather than inline
//! literals so alternative calibrations can be substituted without code
//! changes. Values match the reference model.

use crate::assets::CreditQuality;
use crate::error::{ModelError, ModelResult};
use crate::risk::RiskType;

/// Coverage units per technical provisions row (simplified assumption)
pub const COVERAGE_UNITS: f64 = 1000.0;

/// RBC2 component coefficients applied to their single drivers
#[derive(Debug, Clone, PartialEq)]
pub struct RbcCoefficients {
    /// C1 credit risk charge on assets
    pub credit: f64,
    /// C2 insurance risk charge on liabilities
    pub insurance: f64,
    /// C3 market risk charge on assets
    pub market: f64,
    /// C4 operational risk charge on premiums
    pub operational: f64,
}

impl Default for RbcCoefficients {
    fn default() -> Self {
        Self {
            credit: 0.04,
            insurance: 0.05,
            market: 0.03,
            operational: 0.02,
        }
    }
}

impl RbcCoefficients {
    /// Coefficients must be non-negative charges
    pub fn validate(&self) -> ModelResult<()> {
        for (name, value) in [
            ("rbc_credit_coefficient", self.credit),
            ("rbc_insurance_coefficient", self.insurance),
            ("rbc_market_coefficient", self.market),
            ("rbc_operational_coefficient", self.operational),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::input(name, value, "must be a non-negative charge"));
            }
        }
        Ok(())
    }
}

/// Flat asset characteristics applied to every forecast period
#[derive(Debug, Clone, PartialEq)]
pub struct AssetProfile {
    /// Expected annual return on the portfolio
    pub expected_return: f64,
    /// Portfolio duration in years
    pub duration: f64,
    /// Portfolio-level credit quality
    pub credit_quality: CreditQuality,
}

impl Default for AssetProfile {
    fn default() -> Self {
        Self {
            expected_return: 0.05,
            duration: 8.0,
            credit_quality: CreditQuality::Aa,
        }
    }
}

/// One row of the risk margin calibration: impact, probability and weight
#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactor {
    pub risk_type: RiskType,
    /// Monetary impact if the risk materializes
    pub impact: f64,
    /// Probability of occurrence over the horizon
    pub probability: f64,
    /// Regulatory weight, at least 1
    pub risk_weight: f64,
}

impl RiskFactor {
    /// Default per-risk-type calibration
    pub fn default_set() -> Vec<Self> {
        vec![
            Self {
                risk_type: RiskType::Market,
                impact: 5_000_000.0,
                probability: 0.05,
                risk_weight: 1.5,
            },
            Self {
                risk_type: RiskType::Credit,
                impact: 3_000_000.0,
                probability: 0.03,
                risk_weight: 1.3,
            },
            Self {
                risk_type: RiskType::Insurance,
                impact: 2_000_000.0,
                probability: 0.04,
                risk_weight: 1.2,
            },
            Self {
                risk_type: RiskType::Operational,
                impact: 1_000_000.0,
                probability: 0.02,
                risk_weight: 1.1,
            },
        ]
    }

    /// Check impact/probability/weight domains
    pub fn validate(&self) -> ModelResult<()> {
        if !self.impact.is_finite() || self.impact < 0.0 {
            return Err(ModelError::input("impact", self.impact, "must be non-negative"));
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(ModelError::input(
                "probability",
                self.probability,
                "must lie in [0, 1]",
            ));
        }
        if !self.risk_weight.is_finite() || self.risk_weight < 1.0 {
            return Err(ModelError::input(
                "risk_weight",
                self.risk_weight,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Dashboard target values, one per summary metric
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTargets {
    /// RBC2 ratio target (percent)
    pub rbc_ratio: f64,
    /// CSM share of total provisions target (percent)
    pub csm_ratio: f64,
    /// Duration gap target
    pub duration_gap: f64,
    /// Risk margin share of provisions target (percent)
    pub risk_margin_ratio: f64,
    /// Capital adequacy target (percent)
    pub capital_adequacy: f64,
}

impl Default for DashboardTargets {
    fn default() -> Self {
        Self {
            rbc_ratio: 150.0,
            csm_ratio: 15.0,
            duration_gap: 0.0,
            risk_margin_ratio: 5.0,
            capital_adequacy: 110.0,
        }
    }
}
