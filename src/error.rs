//! Error types for the ALM model
//!
//! All core computations are deterministic, so a failure is always a data
//! problem rather than a transient one: a malformed assumption, a zero
//! divisor in a ratio, or a forecaster output that breaks its contract.
//! Each variant records which component raised it so the pipeline can halt
//! and report without emitting partial tables.

use thiserror::Error;

/// Specialized result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the calculation pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Malformed input detected before computation
    #[error("invalid input for {parameter}: {value} ({reason})")]
    InputDomain {
        /// Name of the offending parameter or argument
        parameter: String,
        /// The rejected value
        value: f64,
        /// Why the value was rejected
        reason: String,
    },

    /// A ratio computation would divide by zero
    #[error("division by zero in {component}: {detail}")]
    DivisionByZero {
        /// Component that attempted the division
        component: String,
        /// What the divisor represents
        detail: String,
    },

    /// Forecaster output violated its contract
    #[error("forecast contract violation: {reason}")]
    ForecastContract {
        /// Description of the violation (misaligned horizon, gap, duplicate date)
        reason: String,
    },
}

impl ModelError {
    /// Convenience constructor for input-domain violations
    pub fn input(parameter: &str, value: f64, reason: &str) -> Self {
        Self::InputDomain {
            parameter: parameter.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    /// Convenience constructor for division-by-zero conditions
    pub fn div_zero(component: &str, detail: &str) -> Self {
        Self::DivisionByZero {
            component: component.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Convenience constructor for forecast contract violations
    pub fn contract(reason: impl Into<String>) -> Self {
        Self::ForecastContract {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::input("discount_rate", -0.5, "must be non-negative");
        assert!(err.to_string().contains("discount_rate"));

        let err = ModelError::div_zero("rbc_ratio", "required capital is zero");
        assert!(err.to_string().contains("rbc_ratio"));
    }
}
