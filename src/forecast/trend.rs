//! Deterministic linear-trend forecaster

use super::{Forecaster, Periodicity, TimeSeries, TimeSeriesPoint};
use crate::error::{ModelError, ModelResult};

/// Ordinary least squares linear trend over the history
///
/// Stands in for an external statistical model. Returns fitted values for
/// the historical dates (not the raw observations) plus extrapolated values
/// for the requested horizon, mirroring how a fitted model reports both
/// in-sample and out-of-sample estimates.
#[derive(Debug, Clone, Default)]
pub struct TrendForecaster;

impl TrendForecaster {
    pub fn new() -> Self {
        Self
    }

    /// Fit slope and intercept by least squares on (index, value) pairs
    fn fit(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            cov += dx * (y - mean_y);
            var += dx * dx;
        }

        // A single-point history has no slope
        let slope = if var > 0.0 { cov / var } else { 0.0 };
        (slope, mean_y - slope * mean_x)
    }
}

impl Forecaster for TrendForecaster {
    fn forecast(
        &self,
        history: &TimeSeries,
        horizon: usize,
        periodicity: Periodicity,
    ) -> ModelResult<TimeSeries> {
        if history.is_empty() {
            return Err(ModelError::input(
                "history",
                0.0,
                "at least one observation is required",
            ));
        }

        let values = history.values();
        let (slope, intercept) = Self::fit(&values);

        let mut points = Vec::with_capacity(history.len() + horizon);
        for (i, observed) in history.points().iter().enumerate() {
            points.push(TimeSeriesPoint {
                date: observed.date,
                value: intercept + slope * i as f64,
            });
        }

        let mut date = history
            .last_date()
            .ok_or_else(|| ModelError::contract("history is empty"))?;
        for i in history.len()..history.len() + horizon {
            date = periodicity.advance(date);
            points.push(TimeSeriesPoint {
                date,
                value: intercept + slope * i as f64,
            });
        }

        TimeSeries::new(points)
    }
}
