//! # pathsim_core: Foundation for the Path Simulation Kernel
//!
//! ## Layer 1 (Foundation) Role
//!
//! pathsim_core serves as the bottom layer of the workspace, providing:
//! - Error types: `SimulationError` (`types::error`)
//! - Time discretisation: `TimeGrid` (`types::grid`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pathsim_* crates, with minimal
//! external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pathsim_core::types::{SimulationError, TimeGrid};
//!
//! // A one-year horizon split into 252 daily steps
//! let grid = TimeGrid::new(1.0, 252).unwrap();
//! assert!((grid.dt() - 1.0 / 252.0).abs() < 1e-15);
//!
//! // Invalid horizons are rejected before any simulation runs
//! let err = TimeGrid::new(0.0, 252).unwrap_err();
//! assert!(err.is_parameter_error());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `TimeGrid`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{SimulationError, TimeGrid};
