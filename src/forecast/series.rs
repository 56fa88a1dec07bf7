//! Date/value time series with contract validation

use crate::error::{ModelError, ModelResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single dated observation or projection point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Reporting frequency of a series, period-end convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Periodicity {
    Monthly,
    Quarterly,
    Annual,
}

impl Periodicity {
    /// Calendar months per period
    pub fn months(self) -> u32 {
        match self {
            Periodicity::Monthly => 1,
            Periodicity::Quarterly => 3,
            Periodicity::Annual => 12,
        }
    }

    /// Advance a date by one period, landing on the month end
    pub fn advance(self, date: NaiveDate) -> NaiveDate {
        let total = date.year() * 12 + date.month() as i32 - 1 + self.months() as i32;
        month_end(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
    }
}

/// Last calendar day of the given month
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .expect("valid calendar month")
}

/// An ordered date/value series
///
/// Construction rejects out-of-order or duplicate dates; beyond that the
/// series is read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    /// Build a series from points, enforcing strict date ordering
    pub fn new(points: Vec<TimeSeriesPoint>) -> ModelResult<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ModelError::contract(format!(
                    "dates must be strictly increasing: {} followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build a month-end series from a start month and a value sequence
    pub fn monthly(start_year: i32, start_month: u32, values: &[f64]) -> ModelResult<Self> {
        if !(1..=12).contains(&start_month) {
            return Err(ModelError::input(
                "start_month",
                start_month as f64,
                "must be a calendar month 1-12",
            ));
        }
        let mut date = month_end(start_year, start_month);
        let mut points = Vec::with_capacity(values.len());
        for &value in values {
            points.push(TimeSeriesPoint { date, value });
            date = Periodicity::Monthly.advance(date);
        }
        Self::new(points)
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values in date order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Arithmetic mean of the values (0 for an empty series)
    pub fn mean_value(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(|p| p.value).sum::<f64>() / self.points.len() as f64
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

/// Verify a forecaster's output against its contract
///
/// The output must contain one point per historical date (dates matching
/// exactly) followed by `horizon` future points stepping by `periodicity`
/// from the last historical date.
pub fn validate_contract(
    output: &TimeSeries,
    history: &TimeSeries,
    horizon: usize,
    periodicity: Periodicity,
) -> ModelResult<()> {
    let expected_len = history.len() + horizon;
    if output.len() != expected_len {
        return Err(ModelError::contract(format!(
            "expected {} points ({} history + {} horizon), got {}",
            expected_len,
            history.len(),
            horizon,
            output.len()
        )));
    }

    for (out, hist) in output.points().iter().zip(history.points()) {
        if out.date != hist.date {
            return Err(ModelError::contract(format!(
                "historical date {} misaligned with forecast date {}",
                hist.date, out.date
            )));
        }
    }

    let mut expected = match history.last_date() {
        Some(date) => date,
        None => return Err(ModelError::contract("history is empty")),
    };
    for point in &output.points()[history.len()..] {
        expected = periodicity.advance(expected);
        if point.date != expected {
            return Err(ModelError::contract(format!(
                "gap in forecast: expected {}, got {}",
                expected, point.date
            )));
        }
    }

    Ok(())
}
