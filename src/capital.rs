//! RBC2 capital requirement calculations
//!
//! Four risk components, each a single driver times a fixed coefficient,
//! aggregated by root-sum-of-squares (diversification benefit model), plus
//! the available capital and ratio comparisons.

use crate::assumptions::RbcCoefficients;
use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// RBC2 risk component charges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbcComponents {
    /// C1 credit risk (assets driver)
    pub c1: f64,
    /// C2 insurance risk (liabilities driver)
    pub c2: f64,
    /// C3 market risk (assets driver)
    pub c3: f64,
    /// C4 operational risk (premiums driver)
    pub c4: f64,
}

impl RbcComponents {
    /// Derive the component charges from their drivers
    pub fn from_drivers(
        assets: f64,
        liabilities: f64,
        premiums: f64,
        coefficients: &RbcCoefficients,
    ) -> ModelResult<Self> {
        for (name, value) in [
            ("assets", assets),
            ("liabilities", liabilities),
            ("premiums", premiums),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::input(name, value, "driver must be non-negative"));
            }
        }

        Ok(Self {
            c1: assets * coefficients.credit,
            c2: liabilities * coefficients.insurance,
            c3: assets * coefficients.market,
            c4: premiums * coefficients.operational,
        })
    }

    /// Required capital: Euclidean norm of the four components
    pub fn required_capital(&self) -> f64 {
        (self.c1 * self.c1 + self.c2 * self.c2 + self.c3 * self.c3 + self.c4 * self.c4).sqrt()
    }
}

/// Available capital: mean assets less mean liabilities
pub fn available_capital(mean_assets: f64, mean_liabilities: f64) -> f64 {
    mean_assets - mean_liabilities
}

/// RBC2 ratio in percent; a zero required capital is a reported error
pub fn rbc_ratio(available: f64, required: f64) -> ModelResult<f64> {
    if required == 0.0 {
        return Err(ModelError::div_zero("rbc_ratio", "required capital is zero"));
    }
    Ok(available / required * 100.0)
}

/// Complete capital position for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalReport {
    pub components: RbcComponents,
    pub required_capital: f64,
    pub available_capital: f64,
    pub rbc_ratio: f64,
}

impl CapitalReport {
    /// Compute the full capital position from the aggregate drivers
    pub fn compute(
        mean_assets: f64,
        mean_liabilities: f64,
        premiums: f64,
        coefficients: &RbcCoefficients,
    ) -> ModelResult<Self> {
        let components =
            RbcComponents::from_drivers(mean_assets, mean_liabilities, premiums, coefficients)?;
        let required = components.required_capital();
        let available = available_capital(mean_assets, mean_liabilities);
        let ratio = rbc_ratio(available, required)?;

        Ok(Self {
            components,
            required_capital: required,
            available_capital: available,
            rbc_ratio: ratio,
        })
    }
}
