//! Valuation engine assembling the technical provisions table

use super::provisions::{TechnicalProvisions, TechnicalProvisionsRow};
use crate::assumptions::{Assumptions, COVERAGE_UNITS};
use crate::error::{ModelError, ModelResult};
use crate::forecast::TimeSeries;

/// Best estimate liability: present value of the first `periods` cash flows
///
/// Cash flow at position `t` (1-indexed) is discounted by `(1 + rate)^t`.
/// `periods` must not exceed the available cash flows.
pub fn bel(cash_flows: &[f64], discount_rate: f64, periods: usize) -> ModelResult<f64> {
    if periods > cash_flows.len() {
        return Err(ModelError::input(
            "periods",
            periods as f64,
            "exceeds the available cash flows",
        ));
    }
    if !discount_rate.is_finite() || discount_rate <= -1.0 {
        return Err(ModelError::input(
            "discount_rate",
            discount_rate,
            "must be greater than -100%",
        ));
    }

    Ok(cash_flows[..periods]
        .iter()
        .enumerate()
        .map(|(i, cf)| cf / (1.0 + discount_rate).powi(i as i32 + 1))
        .sum())
}

/// Risk adjustment as a fixed cost-of-capital percentage of BEL
pub fn risk_adjustment(bel: f64, cost_of_capital: f64) -> f64 {
    bel * cost_of_capital
}

/// Contractual service margin, floored at zero
///
/// One scalar derived from mean fulfilment cash flows and mean risk
/// adjustment; the caller broadcasts it to every period.
pub fn csm(mean_fulfilment_cashflows: f64, mean_risk_adjustment: f64, acquisition_costs: f64) -> f64 {
    (-(mean_fulfilment_cashflows + mean_risk_adjustment - acquisition_costs)).max(0.0)
}

/// Builds the technical provisions table from a forecast and assumptions
pub struct ValuationEngine {
    assumptions: Assumptions,
}

impl ValuationEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Assemble one provisions row per forecast date
    ///
    /// BEL runs off: row `i` discounts the claim cash flows still remaining
    /// after `i` coverage periods have elapsed, reaching zero once the
    /// coverage period is exhausted. The CSM is a single scalar from the
    /// mean BEL and risk adjustment, broadcast to every row.
    pub fn build_provisions(&self, forecast: &TimeSeries) -> ModelResult<TechnicalProvisions> {
        let params = &self.assumptions.params;
        let cash_flows = params.claim_cash_flows();

        let mut bels = Vec::with_capacity(forecast.len());
        for i in 0..forecast.len() {
            let remaining = params.coverage_period.saturating_sub(i);
            bels.push(bel(&cash_flows, params.discount_rate, remaining)?);
        }

        let risk_adjustments: Vec<f64> = bels
            .iter()
            .map(|&b| risk_adjustment(b, params.risk_adjustment_coc))
            .collect();

        let mean_bel = mean(&bels);
        let mean_ra = mean(&risk_adjustments);
        let csm_value = csm(mean_bel, mean_ra, params.acquisition_costs);

        let rows = forecast
            .points()
            .iter()
            .zip(bels.iter().zip(&risk_adjustments))
            .map(|(point, (&bel_value, &ra_value))| TechnicalProvisionsRow {
                date: point.date,
                bel: bel_value,
                risk_adjustment: ra_value,
                csm: csm_value,
                loss_component: 0.0,
                coverage_units: COVERAGE_UNITS,
                total: bel_value + ra_value + csm_value,
            })
            .collect();

        Ok(TechnicalProvisions { rows })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bel_zero_periods_is_zero() {
        assert_eq!(bel(&[100.0, 200.0], 0.05, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_bel_zero_rate_sums_cash_flows() {
        let value = bel(&[100.0, 100.0, 100.0], 0.0, 3).unwrap();
        assert_relative_eq!(value, 300.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bel_discounts_one_indexed() {
        // Single cash flow one period out: 100 / 1.03
        let value = bel(&[100.0], 0.03, 1).unwrap();
        assert_relative_eq!(value, 100.0 / 1.03, epsilon = 1e-12);
    }

    #[test]
    fn test_bel_reference_value() {
        // 12 level cash flows of 50,000 at 3%: annuity PV ~ 497,740
        let value = bel(&[50_000.0; 12], 0.03, 12).unwrap();
        let annuity = 50_000.0 * (1.0 - 1.03_f64.powi(-12)) / 0.03;
        assert_relative_eq!(value, annuity, epsilon = 1e-6);
    }

    #[test]
    fn test_bel_monotone_in_cash_flows() {
        let base = bel(&[100.0, 100.0, 100.0], 0.05, 3).unwrap();
        let bumped = bel(&[100.0, 150.0, 100.0], 0.05, 3).unwrap();
        assert!(bumped > base);
    }

    #[test]
    fn test_bel_periods_out_of_bounds() {
        assert!(bel(&[100.0, 100.0], 0.05, 3).is_err());
    }

    #[test]
    fn test_csm_floor_at_zero() {
        // Fulfilment cash flows far above acquisition costs: floored
        assert_eq!(csm(497_740.0, 29_864.0, 50_000.0), 0.0);
        // Negative fulfilment (net inflow) releases a positive margin
        assert_relative_eq!(csm(-100_000.0, 6_000.0, 50_000.0), 144_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_risk_adjustment_is_percentage_of_bel() {
        assert_relative_eq!(risk_adjustment(500_000.0, 0.06), 30_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_provisions_row_invariants() {
        let engine = ValuationEngine::new(Assumptions::base_case());
        let forecast = TimeSeries::monthly(2023, 1, &[1_000_000.0; 24]).unwrap();
        let table = engine.build_provisions(&forecast).unwrap();

        assert_eq!(table.len(), 24);
        for row in &table.rows {
            assert_eq!(row.loss_component, 0.0);
            assert_eq!(row.coverage_units, 1000.0);
            assert!(row.csm >= 0.0);
            assert_relative_eq!(
                row.total,
                row.bel + row.risk_adjustment + row.csm,
                epsilon = 1e-12
            );
        }

        // Same broadcast CSM in every row
        let first_csm = table.rows[0].csm;
        assert!(table.rows.iter().all(|r| r.csm == first_csm));

        // BEL runs off to zero once coverage is exhausted
        assert!(table.rows[0].bel > table.rows[6].bel);
        assert_eq!(table.rows[12].bel, 0.0);
        assert_eq!(table.rows[23].bel, 0.0);
    }
}
