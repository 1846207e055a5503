//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The kernel rejected the parameters or aborted the simulation.
    #[error("simulation error: {0}")]
    Simulation(#[from] pathsim_core::SimulationError),

    /// Unknown output format requested.
    #[error("unknown output format '{0}' (expected table, csv, or json)")]
    UnknownFormat(String),

    /// File or stream I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
