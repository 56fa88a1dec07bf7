//! Asset value forecasting boundary
//!
//! The statistical model is an injected collaborator behind the
//! [`Forecaster`] trait, so the calculation pipeline can be driven by
//! deterministic synthetic series in tests. The built-in
//! [`TrendForecaster`] fits an ordinary least squares linear trend.

mod series;
mod trend;

pub use series::{validate_contract, Periodicity, TimeSeries, TimeSeriesPoint};
pub use trend::TrendForecaster;

use crate::error::ModelResult;

/// Produces a date/value projection covering history plus future periods
pub trait Forecaster {
    /// Forecast `horizon` periods beyond the history
    ///
    /// The output must cover every historical date plus `horizon` future
    /// dates, ordered and gap-free; the caller verifies this contract with
    /// [`validate_contract`].
    fn forecast(
        &self,
        history: &TimeSeries,
        horizon: usize,
        periodicity: Periodicity,
    ) -> ModelResult<TimeSeries>;
}
