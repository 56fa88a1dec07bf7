//! Model runner: the sequential calculation pipeline
//!
//! Each stage fully materializes its output before the next runs, because
//! downstream steps read aggregate statistics (means) of upstream tables.
//! The pipeline halts on the first error; partial tables are never emitted.

use crate::assets::AssetPortfolio;
use crate::assumptions::Assumptions;
use crate::capital::CapitalReport;
use crate::dashboard::Dashboard;
use crate::error::ModelResult;
use crate::forecast::{validate_contract, Forecaster, Periodicity, TimeSeries, TrendForecaster};
use crate::risk::RiskAnalysis;
use crate::stress::{run_scenarios, StressResult};
use crate::valuation::{TechnicalProvisions, ValuationEngine};

/// All tables produced by one model run
#[derive(Debug, Clone)]
pub struct ModelResults {
    pub assumptions: Assumptions,
    pub forecast: TimeSeries,
    pub provisions: TechnicalProvisions,
    pub assets: AssetPortfolio,
    pub capital: CapitalReport,
    pub risk: RiskAnalysis,
    pub stress: Vec<StressResult>,
    pub dashboard: Dashboard,
}

/// Pre-loaded runner for the full ALM pipeline
///
/// Holds the assumptions and an injected forecaster so many runs can share
/// one setup.
pub struct ModelRunner {
    assumptions: Assumptions,
    forecaster: Box<dyn Forecaster>,
}

impl ModelRunner {
    /// Create a runner with base-case assumptions and the built-in trend forecaster
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::base_case())
    }

    /// Create a runner with specific assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            assumptions,
            forecaster: Box::new(TrendForecaster::new()),
        }
    }

    /// Replace the forecaster (e.g. with a synthetic series for testing)
    pub fn with_forecaster(mut self, forecaster: Box<dyn Forecaster>) -> Self {
        self.forecaster = forecaster;
        self
    }

    /// Get reference to the assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to the assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }

    /// Run the full pipeline over a monthly asset history
    pub fn run(&self, history: &TimeSeries, horizon: usize) -> ModelResult<ModelResults> {
        self.assumptions.validate()?;
        let params = &self.assumptions.params;

        log::info!(
            "forecasting {} periods beyond {} observations",
            horizon,
            history.len()
        );
        let forecast = self
            .forecaster
            .forecast(history, horizon, Periodicity::Monthly)?;
        validate_contract(&forecast, history, horizon, Periodicity::Monthly)?;

        log::info!("building technical provisions for {} periods", forecast.len());
        let valuation = ValuationEngine::new(self.assumptions.clone());
        let provisions = valuation.build_provisions(&forecast)?;

        let assets = AssetPortfolio::from_forecast(&forecast, &self.assumptions.asset_profile);

        let capital = CapitalReport::compute(
            assets.mean_market_value(),
            provisions.mean_total(),
            params.annual_premium,
            &self.assumptions.rbc,
        )?;
        log::debug!(
            "required capital {:.2}, available {:.2}, ratio {:.1}%",
            capital.required_capital,
            capital.available_capital,
            capital.rbc_ratio
        );

        let risk = RiskAnalysis::from_factors(&self.assumptions.risk_factors)?;

        let stress = run_scenarios(
            &self.assumptions.stress_scenarios,
            assets.mean_market_value(),
            provisions.mean_total(),
        )?;

        let dashboard = Dashboard::build(
            &capital,
            &provisions,
            &assets,
            &risk,
            &self.assumptions.targets,
        )?;
        log::info!(
            "dashboard complete: {}",
            if dashboard.all_green() { "all GREEN" } else { "RED metrics present" }
        );

        Ok(ModelResults {
            assumptions: self.assumptions.clone(),
            forecast,
            provisions,
            assets,
            capital,
            risk,
            stress,
            dashboard,
        })
    }
}

impl Default for ModelRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::MetricStatus;
    use approx::assert_relative_eq;

    /// The reference 12-month asset history (steps of roughly 20,000)
    fn reference_history() -> TimeSeries {
        TimeSeries::monthly(
            2023,
            1,
            &[
                1_000_000.0, 1_020_000.0, 1_040_000.0, 1_065_000.0, 1_080_000.0, 1_100_000.0,
                1_120_000.0, 1_140_000.0, 1_160_000.0, 1_180_000.0, 1_200_000.0, 1_220_000.0,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_end_to_end_run() {
        let runner = ModelRunner::new();
        let results = runner.run(&reference_history(), 12).unwrap();

        // One provisions row per forecast point: 12 history + 12 horizon
        assert_eq!(results.forecast.len(), 24);
        assert_eq!(results.provisions.len(), 24);
        assert_eq!(results.assets.len(), 24);

        for row in &results.provisions.rows {
            assert_eq!(row.loss_component, 0.0);
            assert_eq!(row.coverage_units, 1000.0);
            assert!(row.csm >= 0.0);
            assert_relative_eq!(
                row.total,
                row.bel + row.risk_adjustment + row.csm,
                epsilon = 1e-12
            );
        }

        // Base stress scenario is exactly neutral
        let base = &results.stress[0];
        assert_eq!(base.scenario, "Base");
        assert_eq!(base.asset_impact, 0.0);
        assert_eq!(base.liability_impact, 0.0);
        assert_eq!(base.capital_impact, 0.0);
        assert_eq!(base.rbc_ratio_impact, 0.0);

        assert_eq!(results.stress.len(), 5);
        assert_eq!(results.dashboard.metrics.len(), 5);
    }

    #[test]
    fn test_duration_gap_metric_is_red() {
        // Mean asset duration (8) minus mean coverage units (1000) is far
        // below the zero target
        let runner = ModelRunner::new();
        let results = runner.run(&reference_history(), 12).unwrap();
        let gap = &results.dashboard.metrics[2];
        assert_eq!(gap.name, "Duration Gap");
        assert_relative_eq!(gap.current, -992.0, epsilon = 1e-9);
        assert_eq!(gap.status, MetricStatus::Red);
    }

    #[test]
    fn test_invalid_assumptions_halt_pipeline() {
        let mut assumptions = Assumptions::base_case();
        assumptions.params.discount_rate = -0.5;
        let runner = ModelRunner::with_assumptions(assumptions);
        assert!(runner.run(&reference_history(), 12).is_err());
    }

    #[test]
    fn test_run_with_injected_forecaster() {
        struct FlatForecaster(f64);
        impl Forecaster for FlatForecaster {
            fn forecast(
                &self,
                history: &TimeSeries,
                horizon: usize,
                periodicity: Periodicity,
            ) -> ModelResult<TimeSeries> {
                let flat: Vec<f64> = vec![self.0; history.len() + horizon];
                let mut points = Vec::new();
                let mut date = history.points()[0].date;
                for (i, &value) in flat.iter().enumerate() {
                    if i > 0 {
                        date = periodicity.advance(date);
                    }
                    points.push(crate::forecast::TimeSeriesPoint { date, value });
                }
                TimeSeries::new(points)
            }
        }

        let runner = ModelRunner::new().with_forecaster(Box::new(FlatForecaster(2_000_000.0)));
        let results = runner.run(&reference_history(), 6).unwrap();
        assert_eq!(results.assets.len(), 18);
        assert_relative_eq!(
            results.assets.mean_market_value(),
            2_000_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_forecaster_contract_enforced() {
        // A forecaster that ignores the horizon breaks the contract
        struct ShortForecaster;
        impl Forecaster for ShortForecaster {
            fn forecast(
                &self,
                history: &TimeSeries,
                _horizon: usize,
                _periodicity: Periodicity,
            ) -> ModelResult<TimeSeries> {
                Ok(history.clone())
            }
        }

        let runner = ModelRunner::new().with_forecaster(Box::new(ShortForecaster));
        let err = runner.run(&reference_history(), 12).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ModelError::ForecastContract { .. }
        ));
    }
}
