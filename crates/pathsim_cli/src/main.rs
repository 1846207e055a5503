//! Pathsim CLI - Command Line Operations for GBM Path Simulation
//!
//! This is the operational entry point for the pathsim simulation kernel.
//!
//! # Commands
//!
//! - `pathsim simulate` - Generate one or more GBM price trajectories
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate drives the kernel
//! layers (`pathsim_core`, `pathsim_models`, `pathsim_engine`) behind a
//! unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Pathsim GBM Path Simulation CLI
#[derive(Parser)]
#[command(name = "pathsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more GBM price trajectories
    Simulate(commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate(args) => commands::simulate::run(&args),
    }
}
