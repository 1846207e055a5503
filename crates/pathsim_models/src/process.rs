//! StochasticProcess trait for a unified one-step update interface.
//!
//! This module defines the abstraction boundary between the iteration logic
//! in the engine and the price-update rule of a concrete model. The engine
//! owns the loop and the random source; a process only knows how to take
//! the current state one step forward given a standard-normal increment.
//!
//! ## Design Philosophy
//!
//! - **Static dispatch only**: the engine is generic over `P:
//!   StochasticProcess`; do NOT use `Box<dyn StochasticProcess>`
//! - **Single factor**: one state variable, one Brownian increment per
//!   step. Multi-factor processes (e.g. stochastic volatility) would widen
//!   this trait rather than change the engine loop.

use num_traits::Float;

/// Unified interface for single-factor stochastic process models.
///
/// A process is a pure update rule: given the current state, the step
/// length `dt`, and one standard-normal draw `dw`, it produces the next
/// state. It holds its own parameters and performs no I/O and no random
/// number generation.
///
/// # Type Parameters
/// * `T` - Floating-point scalar (`f64` in the engine; `f32` supported
///   for verification)
///
/// # Contract
/// - `evolve` must be deterministic in `(state, dt, dw)`
/// - `dt > 0` is a precondition enforced by the caller's time grid
/// - `initial_state` returns the state at time zero, exactly
pub trait StochasticProcess<T: Float> {
    /// State at the start of the path (element 0 of the trajectory).
    fn initial_state(&self) -> T;

    /// Advance the state by one time step.
    ///
    /// # Arguments
    /// * `state` - Current state
    /// * `dt` - Step length (positive)
    /// * `dw` - Standard-normal increment for this step
    fn evolve(&self, state: T, dt: T, dw: T) -> T;

    /// Process name for logging and diagnostics.
    fn name(&self) -> &'static str;
}
