//! Risk margin calculations per risk type

use crate::assumptions::RiskFactor;
use crate::error::ModelResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of risk types in the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    Market,
    Credit,
    Insurance,
    Operational,
}

impl fmt::Display for RiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskType::Market => "Market Risk",
            RiskType::Credit => "Credit Risk",
            RiskType::Insurance => "Insurance Risk",
            RiskType::Operational => "Operational Risk",
        };
        write!(f, "{}", label)
    }
}

/// Risk margin from an impact/probability/weight triple
pub fn risk_margin(impact: f64, probability: f64, risk_weight: f64) -> f64 {
    impact * probability * risk_weight
}

/// One computed row of the risk analysis table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMarginRow {
    pub risk_type: RiskType,
    pub impact: f64,
    pub probability: f64,
    pub risk_weight: f64,
    pub risk_margin: f64,
}

/// Risk analysis table, one row per risk type, rows independent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub rows: Vec<RiskMarginRow>,
}

impl RiskAnalysis {
    /// Compute margins for each calibrated risk factor
    pub fn from_factors(factors: &[RiskFactor]) -> ModelResult<Self> {
        let mut rows = Vec::with_capacity(factors.len());
        for factor in factors {
            factor.validate()?;
            rows.push(RiskMarginRow {
                risk_type: factor.risk_type,
                impact: factor.impact,
                probability: factor.probability,
                risk_weight: factor.risk_weight,
                risk_margin: risk_margin(factor.impact, factor.probability, factor.risk_weight),
            });
        }
        Ok(Self { rows })
    }

    /// Sum of margins across all risk types
    pub fn total_margin(&self) -> f64 {
        self.rows.iter().map(|r| r.risk_margin).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_risk_margin_product() {
        assert_relative_eq!(
            risk_margin(5_000_000.0, 0.05, 1.5),
            375_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_default_calibration_margins() {
        let analysis = RiskAnalysis::from_factors(&RiskFactor::default_set()).unwrap();
        assert_eq!(analysis.rows.len(), 4);

        // Market: 5,000,000 * 0.05 * 1.5 = 375,000
        assert_relative_eq!(analysis.rows[0].risk_margin, 375_000.0, epsilon = 1e-9);
        // Credit: 3,000,000 * 0.03 * 1.3 = 117,000
        assert_relative_eq!(analysis.rows[1].risk_margin, 117_000.0, epsilon = 1e-9);
        // Insurance: 2,000,000 * 0.04 * 1.2 = 96,000
        assert_relative_eq!(analysis.rows[2].risk_margin, 96_000.0, epsilon = 1e-9);
        // Operational: 1,000,000 * 0.02 * 1.1 = 22,000
        assert_relative_eq!(analysis.rows[3].risk_margin, 22_000.0, epsilon = 1e-9);

        assert_relative_eq!(analysis.total_margin(), 610_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_factor_rejected() {
        let mut factors = RiskFactor::default_set();
        factors[1].probability = -0.1;
        assert!(RiskAnalysis::from_factors(&factors).is_err());
    }

    #[test]
    fn test_risk_type_labels() {
        assert_eq!(RiskType::Market.to_string(), "Market Risk");
        assert_eq!(RiskType::Operational.to_string(), "Operational Risk");
    }
}
