//! ALM System - Asset-liability model with IFRS17 and RBC2 calculations
//!
//! This library provides:
//! - Asset value forecasting behind an injectable forecaster trait
//! - IFRS17 technical provisions (BEL, risk adjustment, CSM)
//! - RBC2-style risk-based capital components and ratios
//! - Risk margin analysis and fixed stress scenarios
//! - Dashboard aggregation with target comparison

pub mod assets;
pub mod assumptions;
pub mod capital;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod report;
pub mod risk;
pub mod runner;
pub mod stress;
pub mod valuation;

// Re-export commonly used types
pub use assumptions::{Assumptions, ModelParameters};
pub use error::{ModelError, ModelResult};
pub use forecast::{Forecaster, Periodicity, TimeSeries, TimeSeriesPoint, TrendForecaster};
pub use runner::{ModelResults, ModelRunner};
