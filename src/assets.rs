//! Asset portfolio table derived from the forecast

use crate::assumptions::AssetProfile;
use crate::forecast::TimeSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Portfolio-level credit quality band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditQuality {
    Aaa,
    Aa,
    A,
    Bbb,
}

impl fmt::Display for CreditQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CreditQuality::Aaa => "AAA",
            CreditQuality::Aa => "AA",
            CreditQuality::A => "A",
            CreditQuality::Bbb => "BBB",
        };
        write!(f, "{}", label)
    }
}

/// One period of the assets table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsRow {
    pub date: NaiveDate,
    /// Market value from the forecast, aligned 1:1 with its date index
    pub market_value: f64,
    pub expected_return: f64,
    pub duration: f64,
    pub credit_quality: CreditQuality,
}

/// Asset table for a run, one row per forecast point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPortfolio {
    pub rows: Vec<AssetsRow>,
}

impl AssetPortfolio {
    /// Build the table by applying the flat profile to every forecast point
    pub fn from_forecast(forecast: &TimeSeries, profile: &AssetProfile) -> Self {
        let rows = forecast
            .points()
            .iter()
            .map(|point| AssetsRow {
                date: point.date,
                market_value: point.value,
                expected_return: profile.expected_return,
                duration: profile.duration,
                credit_quality: profile.credit_quality,
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean market value, the model's asset baseline
    pub fn mean_market_value(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows.iter().map(|r| r.market_value).sum::<f64>() / self.rows.len() as f64
    }

    pub fn mean_duration(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows.iter().map(|r| r.duration).sum::<f64>() / self.rows.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_align_with_forecast() {
        let forecast = TimeSeries::monthly(2023, 1, &[100.0, 200.0, 300.0]).unwrap();
        let portfolio = AssetPortfolio::from_forecast(&forecast, &AssetProfile::default());

        assert_eq!(portfolio.len(), 3);
        for (row, point) in portfolio.rows.iter().zip(forecast.points()) {
            assert_eq!(row.date, point.date);
            assert_eq!(row.market_value, point.value);
        }
        assert!((portfolio.mean_market_value() - 200.0).abs() < 1e-12);
        assert!((portfolio.mean_duration() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_credit_quality_labels() {
        assert_eq!(CreditQuality::Aa.to_string(), "AA");
        assert_eq!(CreditQuality::Bbb.to_string(), "BBB");
    }
}
