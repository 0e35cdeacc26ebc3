//! ShatterForge Quality Enforcement Tool
//!
//! All quality standards are enforced through this single entry point.
//!
//! # Commands
//!
//! - `cargo xtask check` - Run all quality checks
//! - `cargo xtask ci` - Full CI suite (same as GitHub Actions)
//!
//! Every crate must pass all gates before shipping:
//!
//! 1. Formatting - rustfmt clean
//! 2. Clippy - Zero warnings
//! 3. Tests - All green, all features
//! 4. Documentation - Zero warnings
//! 5. Safety - Zero unwrap/expect in library code

mod check;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// ShatterForge Quality Enforcement
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Quality enforcement for ShatterForge", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all quality checks across the workspace
    Check {
        /// Run in CI mode (stricter, fails on any issue)
        #[arg(long)]
        ci: bool,
    },

    /// Run full CI suite (same as GitHub Actions)
    Ci,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { ci } => check::run(ci),
        Commands::Ci => check::run_ci(),
    }
}
