//! Core simulation types.
//!
//! This module provides:
//! - `error`: Structured error types for parameter validation and numerical failures
//! - `grid`: Validated time discretisation (`TimeGrid`)
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`SimulationError`] from `error`
//! - [`TimeGrid`] from `grid`

pub mod error;
pub mod grid;

// Re-export commonly used types at module level
pub use error::SimulationError;
pub use grid::TimeGrid;
