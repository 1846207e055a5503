//! Geometric Brownian Motion (GBM) process implementation.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Log-space formulation
//!
//! The update uses the exact solution over one interval:
//! ```text
//! S(t+dt) = S(t) * exp((r - 0.5*sigma^2)*dt + sigma*sqrt(dt)*dW)
//! ```
//!
//! This is exact in distribution for constant r and sigma, so the
//! discretisation introduces no step-size bias beyond the quality of the
//! normal variates. It also preserves strict positivity of the price
//! algebraically: `exp` of a finite argument is positive.

use num_traits::Float;

use super::process::StochasticProcess;

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmParams<T: Float> {
    /// Initial spot price
    pub spot: T,
    /// Risk-free rate (annualised)
    pub rate: T,
    /// Volatility (annualised)
    pub volatility: T,
}

impl<T: Float> GbmParams<T> {
    /// Create new GBM parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive)
    /// * `rate` - Risk-free rate (any sign)
    /// * `volatility` - Volatility (must be non-negative)
    ///
    /// # Returns
    /// `Some(GbmParams)` if valid, `None` otherwise
    pub fn new(spot: T, rate: T, volatility: T) -> Option<Self> {
        if spot <= T::zero() || volatility < T::zero() {
            return None;
        }
        Some(Self {
            spot,
            rate,
            volatility,
        })
    }
}

/// Geometric Brownian Motion process.
///
/// A single-factor process using the exact log-space update, suitable for
/// direct use with the engine's path-generation loop.
#[derive(Clone, Copy, Debug)]
pub struct Gbm<T: Float> {
    params: GbmParams<T>,
}

impl<T: Float> Gbm<T> {
    /// Create a new GBM process from parameters.
    pub fn new(params: GbmParams<T>) -> Self {
        Self { params }
    }

    /// Returns the process parameters.
    pub fn params(&self) -> &GbmParams<T> {
        &self.params
    }
}

impl<T: Float> StochasticProcess<T> for Gbm<T> {
    fn initial_state(&self) -> T {
        self.params.spot
    }

    fn evolve(&self, state: T, dt: T, dw: T) -> T {
        let r = self.params.rate;
        let sigma = self.params.volatility;

        // Drift term: (r - 0.5 * sigma^2) * dt
        let half = T::from(0.5).unwrap_or(T::zero());
        let drift = (r - half * sigma * sigma) * dt;

        // Diffusion term: sigma * sqrt(dt) * dW
        let diffusion = sigma * dt.sqrt() * dw;

        state * (drift + diffusion).exp()
    }

    fn name(&self) -> &'static str {
        "GBM"
    }
}
