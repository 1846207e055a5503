//! The core path-generation loop.
//!
//! This module implements the single-pass kernel: one standard-normal
//! draw per step, one process update per step, a per-step domain check,
//! and an all-or-nothing result. It is generic over the process and the
//! random source, so the update rule and the variate stream are both
//! substitutable without touching the iteration logic.

use pathsim_core::types::{SimulationError, TimeGrid};
use pathsim_models::StochasticProcess;

use crate::path::Path;
use crate::rng::NormalSource;

/// Generates one discretised trajectory of `process` over `grid`.
///
/// # Algorithm
///
/// 1. Element 0 is the process's initial state, unmodified.
/// 2. For each of the grid's `n_steps` intervals: draw `Z ~ N(0, 1)` from
///    `rng`, evolve the state by `dt`, and append it.
/// 3. Return the completed sequence of `n_steps + 1` prices.
///
/// # Errors
///
/// Returns [`SimulationError::NumericalInstability`] with the one-based
/// failing step index if an update leaves the valid price domain
/// (non-finite, or underflowed to zero). No partial path is returned.
///
/// # Side effects
///
/// Advances `rng` by exactly `grid.n_steps()` draws; nothing else. On the
/// error branch the source has advanced by the failing step's draw count.
///
/// # Preconditions
///
/// The process's parameters are assumed valid;
/// [`PathGenerator`](crate::PathGenerator) enforces this before calling in.
pub fn generate_path<P, R>(process: &P, grid: &TimeGrid, rng: &mut R) -> Result<Path, SimulationError>
where
    P: StochasticProcess<f64>,
    R: NormalSource,
{
    let dt = grid.dt();
    let n_steps = grid.n_steps();

    let mut values = Vec::with_capacity(n_steps + 1);
    let mut state = process.initial_state();
    values.push(state);

    for step in 1..=n_steps {
        let z = rng.next_normal();
        state = process.evolve(state, dt, z);

        // Overflow in exp produces inf/NaN; underflow produces exactly 0.0,
        // which is finite but violates the positivity invariant.
        if !state.is_finite() || state <= 0.0 {
            return Err(SimulationError::NumericalInstability { step, value: state });
        }

        values.push(state);
    }

    Ok(Path::from_values(values))
}
