//! Error types for structured error handling.
//!
//! This module provides [`SimulationError`], the single error type surfaced
//! by every fallible operation in the simulation kernel. Failures fall into
//! two classes that callers must be able to distinguish:
//!
//! - **Parameter errors**: one or more inputs violate their domain
//!   constraints. Detected before any simulation step runs; no partial
//!   path is ever produced.
//! - **Numerical errors**: an intermediate update produced a price outside
//!   the valid domain (non-finite, or underflowed to zero). Detected
//!   per-step; the call aborts and reports the failing step index.
//!
//! Both classes propagate directly to the caller as typed variants. Nothing
//! is clamped, defaulted, or retried at this layer.

use thiserror::Error;

/// Categorised simulation errors.
///
/// # Variants
/// - `InvalidParameter`: Input violates its domain constraint
/// - `InvalidStepCount`: Step count outside the supported range
/// - `NumericalInstability`: A step update left the valid price domain
///
/// # Examples
/// ```
/// use pathsim_core::types::SimulationError;
///
/// let err = SimulationError::invalid_parameter("spot", "must be positive");
/// assert!(err.is_parameter_error());
/// assert_eq!(format!("{}", err), "invalid parameter 'spot': must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A simulation parameter violated its domain constraint.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// Step count outside the supported range.
    #[error("invalid step count {got}: must be in range [1, {max}]")]
    InvalidStepCount {
        /// Number of steps requested.
        got: usize,
        /// Maximum supported step count.
        max: usize,
    },

    /// A step update produced a price outside the valid domain.
    ///
    /// GBM preserves strict positivity algebraically, so a non-finite or
    /// non-positive price can only arise from floating-point overflow or
    /// underflow in the exponential term. The failing step index is
    /// reported; no partial path is returned.
    #[error("numerical instability at step {step}: computed price {value} is outside (0, inf)")]
    NumericalInstability {
        /// One-based index of the step whose update failed.
        step: usize,
        /// The offending price value.
        value: f64,
    },
}

impl SimulationError {
    /// Create an invalid-parameter error.
    ///
    /// # Arguments
    /// * `name` - Parameter name
    /// * `reason` - Description of the violated constraint
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Check if the error is a parameter-validation failure (caller misuse).
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::InvalidStepCount { .. }
        )
    }

    /// Check if the error is a numerical failure (unstable inputs).
    pub fn is_numerical_error(&self) -> bool {
        matches!(self, Self::NumericalInstability { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = SimulationError::invalid_parameter("volatility", "must be non-negative");
        assert_eq!(
            format!("{}", err),
            "invalid parameter 'volatility': must be non-negative"
        );
    }

    #[test]
    fn test_invalid_step_count_display() {
        let err = SimulationError::InvalidStepCount {
            got: 20_000,
            max: 10_000,
        };
        assert_eq!(
            format!("{}", err),
            "invalid step count 20000: must be in range [1, 10000]"
        );
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = SimulationError::NumericalInstability {
            step: 17,
            value: f64::INFINITY,
        };
        let display = format!("{}", err);
        assert!(display.contains("step 17"));
        assert!(display.contains("inf"));
    }

    #[test]
    fn test_error_classification() {
        let param = SimulationError::invalid_parameter("spot", "must be positive");
        assert!(param.is_parameter_error());
        assert!(!param.is_numerical_error());

        let steps = SimulationError::InvalidStepCount { got: 0, max: 10_000 };
        assert!(steps.is_parameter_error());
        assert!(!steps.is_numerical_error());

        let numeric = SimulationError::NumericalInstability {
            step: 1,
            value: f64::NAN,
        };
        assert!(numeric.is_numerical_error());
        assert!(!numeric.is_parameter_error());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SimulationError::invalid_parameter("spot", "must be positive");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SimulationError::InvalidStepCount { got: 0, max: 10_000 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
