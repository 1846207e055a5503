//! Path-generation façade.
//!
//! This module provides [`PathGenerator`], which validates the simulation
//! parameters once at construction and then orchestrates the kernel loop
//! for single paths, caller-supplied sources, and (in
//! [`batch`](crate::batch)) deterministic parallel batches.

use pathsim_core::types::{SimulationError, TimeGrid};
use pathsim_models::{Gbm, GbmParams};

use crate::generate::generate_path;
use crate::params::SimulationParameters;
use crate::path::Path;
use crate::rng::{NormalSource, SimRng};

/// GBM path generator.
///
/// Construction is fail-fast: every parameter constraint is checked in
/// [`new`](Self::new), so a `PathGenerator` that exists can only fail at
/// generation time for numerical reasons (overflow/underflow in the
/// exponential term under extreme inputs).
///
/// The generator holds no random state of its own; each generation call
/// either receives a caller-owned source or builds a fresh seeded one.
/// That keeps concurrent use trivially safe: the generator is `Sync`, and
/// every parallel worker owns its own source.
///
/// # Examples
///
/// ```rust
/// use pathsim_engine::{PathGenerator, SimulationParameters};
///
/// let generator = PathGenerator::new(SimulationParameters::default()).unwrap();
///
/// let path = generator.generate_seeded(42).unwrap();
/// let again = generator.generate_seeded(42).unwrap();
/// assert_eq!(path, again);
/// ```
#[derive(Clone, Debug)]
pub struct PathGenerator {
    /// Validated simulation parameters.
    params: SimulationParameters,
    /// Time grid derived from the parameters.
    grid: TimeGrid,
    /// The price-update rule.
    process: Gbm<f64>,
}

impl PathGenerator {
    /// Creates a generator, validating the parameters.
    ///
    /// # Errors
    ///
    /// Returns the typed parameter error for the first violated
    /// constraint; no generator is produced.
    pub fn new(params: SimulationParameters) -> Result<Self, SimulationError> {
        params.validate()?;
        let grid = params.time_grid()?;
        let process = Gbm::new(GbmParams {
            spot: params.spot,
            rate: params.rate,
            volatility: params.volatility,
        });
        Ok(Self {
            params,
            grid,
            process,
        })
    }

    /// Returns the validated simulation parameters.
    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Returns the time grid.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Generates one path, drawing from a caller-owned source.
    ///
    /// Advances `rng` by exactly `n_steps` draws. Successive calls with
    /// the same source therefore produce independent paths from one
    /// stream.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NumericalInstability`] if a step update
    /// leaves the valid price domain; no partial path is returned.
    pub fn generate<R: NormalSource>(&self, rng: &mut R) -> Result<Path, SimulationError> {
        generate_path(&self.process, &self.grid, rng)
    }

    /// Generates one path from a fresh source seeded with `seed`.
    ///
    /// Deterministic: the same seed always reproduces the same path.
    pub fn generate_seeded(&self, seed: u64) -> Result<Path, SimulationError> {
        let mut rng = SimRng::from_seed(seed);
        self.generate(&mut rng)
    }
}
