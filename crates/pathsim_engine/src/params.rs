//! Simulation parameters and validation.
//!
//! This module provides [`SimulationParameters`], the five-scalar call
//! contract of the kernel, with fail-fast validation: every domain
//! constraint is checked before any simulation step runs, and violations
//! surface as typed parameter errors rather than degenerate or NaN-laden
//! paths.

use pathsim_core::types::{SimulationError, TimeGrid};

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of paths allowed per batch.
pub const MAX_PATHS: usize = 10_000_000;

/// Simulation parameters for one GBM trajectory.
///
/// # Constraints
///
/// - `spot > 0`, finite
/// - `rate` finite (any sign)
/// - `volatility >= 0`, finite
/// - `maturity > 0`, finite
/// - `n_steps` in `[1, MAX_STEPS]`
///
/// # Examples
///
/// ```rust
/// use pathsim_engine::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .spot(100.0)
///     .rate(0.05)
///     .volatility(0.2)
///     .maturity(1.0)
///     .n_steps(252)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.n_steps, 252);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Initial spot price (S0).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (sigma) - annualised.
    pub volatility: f64,
    /// Time horizon (T) - in years.
    pub maturity: f64,
    /// Number of discrete intervals.
    pub n_steps: usize,
}

impl SimulationParameters {
    /// Creates new simulation parameters.
    ///
    /// No validation is performed here; call [`validate`](Self::validate)
    /// or construct through the [`builder`](Self::builder), which
    /// validates at `build()`. [`PathGenerator`](crate::PathGenerator)
    /// validates again at construction regardless.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64, n_steps: usize) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
            n_steps,
        }
    }

    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Validates all parameters against their domain constraints.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] or
    /// [`SimulationError::InvalidStepCount`] naming the first violated
    /// constraint. Detection happens before any simulation step runs.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !self.rate.is_finite() {
            return Err(SimulationError::invalid_parameter(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(SimulationError::invalid_parameter(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "maturity",
                format!("must be positive and finite, got {}", self.maturity),
            ));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(SimulationError::InvalidStepCount {
                got: self.n_steps,
                max: MAX_STEPS,
            });
        }
        Ok(())
    }

    /// Derives the validated time grid for these parameters.
    pub fn time_grid(&self) -> Result<TimeGrid, SimulationError> {
        TimeGrid::new(self.maturity, self.n_steps)
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
            n_steps: 252,
        }
    }
}

/// Builder for [`SimulationParameters`].
///
/// Provides a fluent API with validation at build time; every field must
/// be supplied explicitly.
///
/// # Examples
///
/// ```rust
/// use pathsim_engine::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .spot(100.0)
///     .rate(0.03)
///     .volatility(0.25)
///     .maturity(0.5)
///     .n_steps(126)
///     .build()
///     .expect("valid parameters");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulationParametersBuilder {
    spot: Option<f64>,
    rate: Option<f64>,
    volatility: Option<f64>,
    maturity: Option<f64>,
    n_steps: Option<usize>,
}

impl SimulationParametersBuilder {
    /// Sets the initial spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the annualised risk-free rate.
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the annualised volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the time horizon in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the number of discrete intervals.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Builds the parameters, validating every constraint.
    ///
    /// # Errors
    ///
    /// Returns a parameter error if a field is missing or out of domain.
    pub fn build(self) -> Result<SimulationParameters, SimulationError> {
        let spot = self
            .spot
            .ok_or_else(|| SimulationError::invalid_parameter("spot", "must be specified"))?;
        let rate = self
            .rate
            .ok_or_else(|| SimulationError::invalid_parameter("rate", "must be specified"))?;
        let volatility = self.volatility.ok_or_else(|| {
            SimulationError::invalid_parameter("volatility", "must be specified")
        })?;
        let maturity = self
            .maturity
            .ok_or_else(|| SimulationError::invalid_parameter("maturity", "must be specified"))?;
        let n_steps = self
            .n_steps
            .ok_or_else(|| SimulationError::invalid_parameter("n_steps", "must be specified"))?;

        let params = SimulationParameters {
            spot,
            rate,
            volatility,
            maturity,
            n_steps,
        };
        params.validate()?;
        Ok(params)
    }
}
