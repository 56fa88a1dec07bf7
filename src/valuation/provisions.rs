//! Technical provisions output table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period of the IFRS17 technical provisions table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalProvisionsRow {
    pub date: NaiveDate,

    /// Best estimate liability for the remaining coverage
    pub bel: f64,

    /// Risk adjustment, a fixed percentage of BEL
    pub risk_adjustment: f64,

    /// Contractual service margin, floored at zero
    pub csm: f64,

    /// Loss component placeholder, always zero in this model
    pub loss_component: f64,

    /// Coverage units placeholder, fixed constant
    pub coverage_units: f64,

    /// BEL + risk adjustment + CSM, maintained exactly
    pub total: f64,
}

/// Complete technical provisions table for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalProvisions {
    pub rows: Vec<TechnicalProvisionsRow>,
}

impl TechnicalProvisions {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn mean_bel(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.bel))
    }

    pub fn mean_risk_adjustment(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.risk_adjustment))
    }

    pub fn mean_csm(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.csm))
    }

    /// Mean total provisions, the model's liability baseline
    pub fn mean_total(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.total))
    }

    pub fn mean_coverage_units(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.coverage_units))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
