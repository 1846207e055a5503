//! Validated time discretisation for path simulation.
//!
//! A [`TimeGrid`] splits a horizon of `maturity` years into `n_steps`
//! intervals of identical length `dt = maturity / n_steps`. The grid is
//! validated at construction so downstream code can rely on `dt` being
//! positive and finite, and it never changes once built.

use super::error::SimulationError;

/// Uniform time grid over a simulation horizon.
///
/// # Invariants
///
/// - `maturity > 0` and finite
/// - `n_steps >= 1`
/// - `dt` is constant across all steps of one path
///
/// # Examples
///
/// ```rust
/// use pathsim_core::types::TimeGrid;
///
/// let grid = TimeGrid::new(2.0, 8).unwrap();
/// assert_eq!(grid.n_steps(), 8);
/// assert_eq!(grid.dt(), 0.25);
///
/// // Grid points run from 0 to maturity inclusive
/// let times: Vec<f64> = grid.times().collect();
/// assert_eq!(times.len(), 9);
/// assert_eq!(times[0], 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    /// Time horizon in years.
    maturity: f64,
    /// Number of discrete intervals.
    n_steps: usize,
}

impl TimeGrid {
    /// Creates a new time grid with validation.
    ///
    /// # Arguments
    ///
    /// * `maturity` - Time horizon in years (must be positive and finite)
    /// * `n_steps` - Number of discrete intervals (must be at least 1)
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] if either argument
    /// violates its constraint.
    pub fn new(maturity: f64, n_steps: usize) -> Result<Self, SimulationError> {
        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "maturity",
                format!("must be positive and finite, got {}", maturity),
            ));
        }
        if n_steps == 0 {
            return Err(SimulationError::invalid_parameter(
                "n_steps",
                "must be at least 1",
            ));
        }
        Ok(Self { maturity, n_steps })
    }

    /// Returns the time horizon in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the number of discrete intervals.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the constant step length `maturity / n_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.maturity / self.n_steps as f64
    }

    /// Returns an iterator over the `n_steps + 1` grid points, from 0 to
    /// maturity.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        let dt = self.dt();
        (0..=self.n_steps).map(move |i| i as f64 * dt)
    }
}
