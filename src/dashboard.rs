//! Summary dashboard: metrics against targets with GREEN/RED status

use crate::assets::AssetPortfolio;
use crate::assumptions::DashboardTargets;
use crate::capital::CapitalReport;
use crate::error::{ModelError, ModelResult};
use crate::risk::RiskAnalysis;
use crate::valuation::TechnicalProvisions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pass/fail status of a metric, boundary inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricStatus {
    Green,
    Red,
}

impl MetricStatus {
    /// GREEN iff current meets or exceeds target
    pub fn from_comparison(current: f64, target: f64) -> Self {
        if current >= target {
            MetricStatus::Green
        } else {
            MetricStatus::Red
        }
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricStatus::Green => write!(f, "GREEN"),
            MetricStatus::Red => write!(f, "RED"),
        }
    }
}

/// One dashboard metric with its target and status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetric {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub status: MetricStatus,
}

impl DashboardMetric {
    fn new(name: &str, current: f64, target: f64) -> Self {
        Self {
            name: name.to_string(),
            current,
            target,
            status: MetricStatus::from_comparison(current, target),
        }
    }
}

/// The five summary metrics, last step of the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub metrics: Vec<DashboardMetric>,
}

impl Dashboard {
    /// Aggregate upstream results into the metric table
    ///
    /// Read-only over prior results; divisions on provisions and
    /// liabilities are guarded.
    pub fn build(
        capital: &CapitalReport,
        provisions: &TechnicalProvisions,
        assets: &AssetPortfolio,
        risk: &RiskAnalysis,
        targets: &DashboardTargets,
    ) -> ModelResult<Self> {
        let mean_provisions = provisions.mean_total();
        if mean_provisions == 0.0 {
            return Err(ModelError::div_zero(
                "dashboard",
                "mean total technical provisions is zero",
            ));
        }
        let base_assets = assets.mean_market_value();

        let metrics = vec![
            DashboardMetric::new("RBC2 Ratio", capital.rbc_ratio, targets.rbc_ratio),
            DashboardMetric::new(
                "IFRS17 CSM Ratio",
                provisions.mean_csm() / mean_provisions * 100.0,
                targets.csm_ratio,
            ),
            DashboardMetric::new(
                "Duration Gap",
                assets.mean_duration() - provisions.mean_coverage_units(),
                targets.duration_gap,
            ),
            DashboardMetric::new(
                "Risk Margin Ratio",
                risk.total_margin() / mean_provisions * 100.0,
                targets.risk_margin_ratio,
            ),
            DashboardMetric::new(
                "Capital Adequacy",
                base_assets / mean_provisions * 100.0,
                targets.capital_adequacy,
            ),
        ];

        Ok(Self { metrics })
    }

    /// True when every metric is GREEN
    pub fn all_green(&self) -> bool {
        self.metrics.iter().all(|m| m.status == MetricStatus::Green)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundary_inclusive() {
        assert_eq!(
            MetricStatus::from_comparison(150.0, 150.0),
            MetricStatus::Green
        );
        assert_eq!(
            MetricStatus::from_comparison(149.999, 150.0),
            MetricStatus::Red
        );
        assert_eq!(
            MetricStatus::from_comparison(150.001, 150.0),
            MetricStatus::Green
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(MetricStatus::Green.to_string(), "GREEN");
        assert_eq!(MetricStatus::Red.to_string(), "RED");
    }

    #[test]
    fn test_metric_carries_status() {
        let metric = DashboardMetric::new("RBC2 Ratio", 160.0, 150.0);
        assert_eq!(metric.status, MetricStatus::Green);
    }
}
