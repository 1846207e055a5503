//! # Pathsim Models (Layer 2: Process Definitions)
//!
//! Stochastic process definitions consumed by the simulation engine.
//!
//! This crate provides:
//! - The [`StochasticProcess`] trait: a substitutable one-step price-update
//!   rule (`process`)
//! - Geometric Brownian Motion under the exact log-space scheme (`gbm`)
//!
//! ## Design Principles
//!
//! - **Static dispatch only**: the engine is generic over the process type;
//!   no `Box<dyn Trait>` in hot paths
//! - **Generic scalar**: processes are generic over `num_traits::Float`,
//!   instantiated with `f64` by the engine
//! - **Validation split**: model-layer constructors return `Option`; the
//!   engine layer turns domain violations into typed errors before any
//!   step runs

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod gbm;
pub mod process;

pub use gbm::{Gbm, GbmParams};
pub use process::StochasticProcess;
