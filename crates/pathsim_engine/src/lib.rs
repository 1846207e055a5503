//! # Pathsim Engine (Layer 3: Simulation Kernel)
//!
//! Single-asset GBM trajectory simulation with an injectable random source
//! and deterministic parallel batch generation.
//!
//! # Architecture
//!
//! ```text
//! PathGenerator
//! ├── SimulationParameters  (the five-scalar call contract, validated)
//! ├── TimeGrid              (constant dt = maturity / n_steps)
//! ├── Gbm                   (one-step price-update rule)
//! ├── SimRng / NormalSource (standard-normal variate source)
//! └── Orchestration
//!     ├── generate_path()      (single-pass kernel loop)
//!     └── generate_batch()     (rayon, one seeded source per path)
//! ```
//!
//! # Contract
//!
//! A successful call returns a [`Path`] of exactly `n_steps + 1` prices;
//! element 0 is the spot, bit-for-bit. A failed call returns a typed
//! [`SimulationError`](pathsim_core::SimulationError) and no path at all:
//! parameter violations are rejected before any step runs, and a step
//! update that leaves the valid price domain aborts the call with the
//! failing step index. The call advances the random source by exactly
//! `n_steps` draws and has no other observable effect.
//!
//! # Examples
//!
//! ## Seeded single-path generation
//!
//! ```rust
//! use pathsim_engine::{PathGenerator, SimulationParameters};
//!
//! let params = SimulationParameters::builder()
//!     .spot(100.0)
//!     .rate(0.05)
//!     .volatility(0.2)
//!     .maturity(1.0)
//!     .n_steps(252)
//!     .build()
//!     .unwrap();
//!
//! let generator = PathGenerator::new(params).unwrap();
//! let path = generator.generate_seeded(42).unwrap();
//!
//! assert_eq!(path.len(), 253);
//! assert_eq!(path.spot(), 100.0);
//! ```
//!
//! ## Caller-owned random source
//!
//! ```rust
//! use pathsim_engine::{PathGenerator, SimRng, SimulationParameters};
//!
//! let generator = PathGenerator::new(SimulationParameters::default()).unwrap();
//!
//! // One source drives successive generations; its state advances by
//! // exactly n_steps draws per call.
//! let mut rng = SimRng::from_seed(7);
//! let first = generator.generate(&mut rng).unwrap();
//! let second = generator.generate(&mut rng).unwrap();
//! assert_ne!(first.terminal(), second.terminal());
//! ```
//!
//! ## Deterministic parallel batch
//!
//! ```rust
//! use pathsim_engine::{PathGenerator, SimulationParameters};
//!
//! let generator = PathGenerator::new(SimulationParameters::default()).unwrap();
//! let paths = generator.generate_batch(64, 42).unwrap();
//! assert_eq!(paths.len(), 64);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod generate;
pub mod generator;
pub mod params;
pub mod path;
pub mod rng;

// Re-exports for convenient access
pub use batch::derive_path_seed;
pub use generate::generate_path;
pub use generator::PathGenerator;
pub use params::{SimulationParameters, SimulationParametersBuilder, MAX_PATHS, MAX_STEPS};
pub use path::Path;
pub use rng::{NormalSource, SimRng};
